// BLS verification over BN254.
//
// Given message m, signature sigma and public key PK in G2:
//   1. H = hash_to_point(m)
//   2. Accept iff e(sigma, G2) == e(H, PK)
//
// Correct signatures satisfy this by bilinearity:
//   e(sk*H, G2) = e(H, G2)^sk = e(H, sk*G2) = e(H, PK)
//
// Aggregates verify with the same equation, provided every signer signed
// the same m. There is no proof-of-possession step here; callers must only
// aggregate keys whose possession has been proven elsewhere.
//
// The point at infinity is never a valid key or signature: e(O, G2) and
// e(H, O) are both one, so accepting it would verify every message.

use crate::aggregate::aggregate_public_keys;
use crate::curve::{G1Point, G2Point};
use crate::error::Result;
use crate::hash::hash_to_point;
use crate::keypair::{PublicKey, PublicKeyG1};
use crate::pairing::{pair, pairing_check};
use crate::sign::Signature;

/// Result of signature verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyResult {
    Valid,
    Invalid,
}

impl VerifyResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyResult::Valid)
    }
}

impl From<bool> for VerifyResult {
    fn from(ok: bool) -> Self {
        if ok {
            VerifyResult::Valid
        } else {
            VerifyResult::Invalid
        }
    }
}

/// Verify a signature against a public key and message.
pub fn verify(message: &[u8], sig: &Signature, pk: &PublicKey) -> Result<VerifyResult> {
    if sig.point().is_identity() || pk.point().is_identity() {
        return Ok(VerifyResult::Invalid);
    }
    let h = hash_to_point(message)?;
    let lhs = pair(sig.point(), &G2Point::generator())?;
    let rhs = pair(&h, pk.point())?;
    Ok((lhs == rhs).into())
}

/// Verify an aggregate signature from signers who all signed `message`.
pub fn verify_aggregate(
    message: &[u8],
    agg_sig: &Signature,
    pubkeys: &[PublicKey],
) -> Result<VerifyResult> {
    let agg_pk = aggregate_public_keys(pubkeys)?;
    verify(message, agg_sig, &agg_pk)
}

/// Check that a G1 and a G2 public key come from the same secret:
/// e(PK_G1, -G2) * e(G1, PK_G2) == 1.
pub fn verify_key_consistency(pk_g1: &PublicKeyG1, pk: &PublicKey) -> Result<VerifyResult> {
    if pk_g1.point().is_identity() || pk.point().is_identity() {
        return Ok(VerifyResult::Invalid);
    }
    let pairs = [
        (*pk_g1.point(), G2Point::generator().negate()),
        (G1Point::generator(), *pk.point()),
    ];
    Ok(pairing_check(&pairs)?.into())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
