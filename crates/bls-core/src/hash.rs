// crates/bls-core/src/hash.rs
//
// Try-and-increment hash to G1, identical to the on-chain `hashToG1(bytes32)`:
//
//   x    = int(data) mod p           (big-endian)
//   loop:
//     beta = x^3 + 3
//     y    = beta^((p+1)/4)
//     if y^2 == beta: return (x, y)
//     x    = x + 1
//
// `data` is normally a keccak256 digest supplied by the caller. Reducing mod p
// (not mod r) before the search is what the verifying contract does; the two
// choices yield different points, so this must not change.
//
// Each attempt succeeds with probability ~1/2. The loop is still capped so a
// field/modulus mismatch surfaces as an error instead of spinning forever.

use ark_bn254::Fq;
use ark_ff::{Field, One};
use sha3::{Digest, Keccak256};

use crate::curve::{G1Point, G1_COEFF_B};
use crate::error::{BlsError, Result};
use crate::field::{field_from_be_bytes_mod_order, sqrt_candidate};

/// Upper bound on try-and-increment iterations.
pub const MAX_HASH_ATTEMPTS: usize = 256;

/// Keccak-256 as used by the EVM.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Map bytes to a G1 point. Deterministic; the returned point has z = 1.
pub fn hash_to_point(data: &[u8]) -> Result<G1Point> {
    try_and_increment(field_from_be_bytes_mod_order(data), MAX_HASH_ATTEMPTS)
}

fn try_and_increment(mut x: Fq, max_attempts: usize) -> Result<G1Point> {
    for attempt in 1..=max_attempts {
        let beta = x.square() * x + G1_COEFF_B;
        let y = sqrt_candidate(&beta);
        if y.square() == beta {
            log::debug!("hash_to_point: found point after {attempt} attempt(s)");
            return G1Point::from_affine(x, y);
        }
        x += Fq::one();
    }

    Err(BlsError::HashToCurveExhausted {
        attempts: max_attempts,
    })
}

/// Hash a raw payload with keccak256, then map the digest to G1.
pub fn hash_message_to_point(payload: &[u8]) -> Result<G1Point> {
    hash_to_point(&keccak256(payload))
}
