//! On-chain encodings of G1 and G2 points
//!
//! A G1 point is two base field integers (x, y). A G2 point is four, and the
//! order of the Fq2 coefficients is a convention that must match the
//! verifying contract. Solidity BN254 libraries and the EVM pairing
//! precompile (EIP-197) put the imaginary coefficient first:
//! `(x.c1, x.c0, y.c1, y.c0)`. That is the default here; the other order is
//! selectable for contracts written the other way.
//!
//! Following the precompiles, the point at infinity is encoded as all-zero
//! coordinates. (0, 0) is not on either curve, so this is unambiguous.

use ark_bn254::{Fq, Fq2};
use ark_ff::Zero;
use serde::{Deserialize, Serialize};

use crate::curve::{CurveConfig, G1Point, G2Point, JacobianPoint};
use crate::error::{BlsError, Result};
use crate::field::{
    field_from_be_bytes, field_from_dec_str, field_to_be_bytes, field_to_dec_string,
};

/// Coefficient order for the four integers of a G2 point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum G2CoordinateOrder {
    /// (x.c1, x.c0, y.c1, y.c0), EIP-197
    #[default]
    ImaginaryFirst,
    /// (x.c0, x.c1, y.c0, y.c1)
    RealFirst,
}

impl G2CoordinateOrder {
    fn split(self, x: Fq2, y: Fq2) -> [Fq; 4] {
        match self {
            G2CoordinateOrder::ImaginaryFirst => [x.c1, x.c0, y.c1, y.c0],
            G2CoordinateOrder::RealFirst => [x.c0, x.c1, y.c0, y.c1],
        }
    }

    fn join(self, w: [Fq; 4]) -> (Fq2, Fq2) {
        match self {
            G2CoordinateOrder::ImaginaryFirst => (Fq2::new(w[1], w[0]), Fq2::new(w[3], w[2])),
            G2CoordinateOrder::RealFirst => (Fq2::new(w[0], w[1]), Fq2::new(w[2], w[3])),
        }
    }
}

fn affine_or_zero<C: CurveConfig>(p: &JacobianPoint<C>) -> Result<(C::Base, C::Base)> {
    if p.is_identity() {
        return Ok((C::Base::zero(), C::Base::zero()));
    }
    p.normalize()
}

fn point_or_identity<C: CurveConfig>(x: C::Base, y: C::Base) -> Result<JacobianPoint<C>> {
    if x.is_zero() && y.is_zero() {
        return Ok(JacobianPoint::identity());
    }
    JacobianPoint::from_affine(x, y)
}

fn expect_len<T>(items: &[T], expected: usize, what: &str) -> Result<()> {
    if items.len() != expected {
        return Err(BlsError::InvalidEncoding(format!(
            "{what} needs {expected} elements, got {}",
            items.len()
        )));
    }
    Ok(())
}

/// (x, y) as decimal strings.
pub fn g1_to_dec(p: &G1Point) -> Result<[String; 2]> {
    let (x, y) = affine_or_zero(p)?;
    Ok([field_to_dec_string(&x), field_to_dec_string(&y)])
}

pub fn g1_from_dec<S: AsRef<str>>(coords: &[S]) -> Result<G1Point> {
    expect_len(coords, 2, "G1 point")?;
    let x = field_from_dec_str(coords[0].as_ref())?;
    let y = field_from_dec_str(coords[1].as_ref())?;
    point_or_identity(x, y)
}

/// Four decimal strings in the given coefficient order.
pub fn g2_to_dec(p: &G2Point, order: G2CoordinateOrder) -> Result<[String; 4]> {
    let (x, y) = affine_or_zero(p)?;
    Ok(order.split(x, y).map(|w| field_to_dec_string(&w)))
}

pub fn g2_from_dec<S: AsRef<str>>(coords: &[S], order: G2CoordinateOrder) -> Result<G2Point> {
    expect_len(coords, 4, "G2 point")?;
    let mut words = [Fq::zero(); 4];
    for (word, s) in words.iter_mut().zip(coords) {
        *word = field_from_dec_str(s.as_ref())?;
    }
    let (x, y) = order.join(words);
    point_or_identity(x, y)
}

/// 64 bytes: x || y, big-endian (EIP-196 layout).
pub fn g1_to_bytes(p: &G1Point) -> Result<[u8; 64]> {
    let (x, y) = affine_or_zero(p)?;
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&field_to_be_bytes(&x));
    out[32..].copy_from_slice(&field_to_be_bytes(&y));
    Ok(out)
}

pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1Point> {
    expect_len(bytes, 64, "G1 encoding")?;
    let x = field_from_be_bytes(&bytes[..32])?;
    let y = field_from_be_bytes(&bytes[32..])?;
    point_or_identity(x, y)
}

/// 128 bytes: x.c1 || x.c0 || y.c1 || y.c0, big-endian (EIP-197 layout).
pub fn g2_to_bytes(p: &G2Point) -> Result<[u8; 128]> {
    let (x, y) = affine_or_zero(p)?;
    let mut out = [0u8; 128];
    for (chunk, w) in out
        .chunks_exact_mut(32)
        .zip(G2CoordinateOrder::ImaginaryFirst.split(x, y))
    {
        chunk.copy_from_slice(&field_to_be_bytes(&w));
    }
    Ok(out)
}

pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2Point> {
    expect_len(bytes, 128, "G2 encoding")?;
    let mut words = [Fq::zero(); 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(32)) {
        *word = field_from_be_bytes(chunk)?;
    }
    let (x, y) = G2CoordinateOrder::ImaginaryFirst.join(words);
    point_or_identity(x, y)
}
