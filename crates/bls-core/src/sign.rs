// BLS signing over BN254.
//
// Signing a message m with secret key sk:
//   1. H = hash_to_point(m)     (try-and-increment into G1)
//   2. sigma = sk * H
//
// `m` is the 32-byte digest the verifying contract hashes to G1. Callers
// holding the raw payload use `sign_message`, which applies keccak256 first.
// Signing is deterministic: the same key and message give the same point.

use crate::curve::G1Point;
use crate::error::Result;
use crate::hash::{hash_to_point, keccak256};
use crate::keypair::SecretKey;

/// A BLS signature: a point in G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub G1Point);

impl Signature {
    /// sigma = sk * hash_to_point(message)
    pub fn sign(sk: &SecretKey, message: &[u8]) -> Result<Self> {
        let h = hash_to_point(message)?;
        Ok(Signature(h.mul(sk.scalar())))
    }

    /// Sign keccak256(payload). Returns the digest alongside the signature
    /// since that digest is what verifiers consume.
    pub fn sign_message(sk: &SecretKey, payload: &[u8]) -> Result<(Self, [u8; 32])> {
        let digest = keccak256(payload);
        Ok((Self::sign(sk, &digest)?, digest))
    }

    pub fn point(&self) -> &G1Point {
        &self.0
    }
}

/// sigma = sk * hash_to_point(message)
pub fn sign(sk: &SecretKey, message: &[u8]) -> Result<Signature> {
    Signature::sign(sk, message)
}
