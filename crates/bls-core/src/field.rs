// crates/bls-core/src/field.rs
//
// Modular arithmetic over the BN254 base field Fq (modulus p) and scalar
// field Fr (group order r).
//
// The field types themselves come from ark_bn254, so every value is kept
// reduced into [0, modulus) by construction. This module adds what the
// curve and hash code need on top of that:
//
//   - inversion by Fermat's little theorem, a^(p-2), failing on zero
//   - the quadratic extension inverse (c0 - c1*u) / (c0^2 + c1^2), since u^2 = -1
//   - the square-root exponent (p+1)/4, valid because p = 3 mod 4
//   - decimal and big-endian conversions used by the on-chain encodings

use ark_bn254::{Fq, Fq2};
use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

use crate::error::{BlsError, Result};

/// BN254 base field modulus p (decimal)
pub const FP_MODULUS: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

/// BN254 group order r (decimal)
pub const FR_MODULUS: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// The field operations the Jacobian group law needs from a coordinate field.
pub trait CurveField: Field {
    /// Multiplicative inverse. Zero has none.
    fn invert(&self) -> Result<Self>;
}

impl CurveField for Fq {
    fn invert(&self) -> Result<Self> {
        fermat_inverse(self)
    }
}

impl CurveField for Fq2 {
    fn invert(&self) -> Result<Self> {
        // (c0 + c1*u)^-1 = (c0 - c1*u) / (c0^2 + c1^2)
        let norm = self.c0.square() + self.c1.square();
        let norm_inv = fermat_inverse(&norm)?;
        Ok(Fq2::new(self.c0 * norm_inv, -(self.c1 * norm_inv)))
    }
}

/// a^(m-2) mod m for a prime modulus m.
pub fn fermat_inverse<F: PrimeField>(a: &F) -> Result<F> {
    if a.is_zero() {
        return Err(BlsError::DivisionByZero);
    }
    let mut exponent = F::MODULUS;
    exponent.sub_with_borrow(&F::BigInt::from(2u64));
    Ok(a.pow(exponent))
}

/// (p + 1) / 4 as a little-endian limb integer.
pub fn sqrt_exponent() -> <Fq as PrimeField>::BigInt {
    let mut e = Fq::MODULUS;
    e.add_with_carry(&<Fq as PrimeField>::BigInt::from(1u64));
    e.div2();
    e.div2();
    e
}

/// Square-root candidate beta^((p+1)/4). Only a root when beta is a quadratic
/// residue; callers must square the result and compare.
pub fn sqrt_candidate(beta: &Fq) -> Fq {
    beta.pow(sqrt_exponent())
}

fn modulus_biguint<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

/// Parse a decimal string into a field element. Values at or above the
/// modulus are rejected rather than reduced.
pub fn field_from_dec_str<F: PrimeField>(s: &str) -> Result<F> {
    let value: BigUint = s
        .trim()
        .parse()
        .map_err(|_| BlsError::InvalidEncoding(format!("not a decimal integer: {s:?}")))?;
    field_from_biguint(&value)
}

fn field_from_biguint<F: PrimeField>(value: &BigUint) -> Result<F> {
    if *value >= modulus_biguint::<F>() {
        return Err(BlsError::InvalidEncoding(format!(
            "{value} is not below the field modulus"
        )));
    }
    Ok(F::from_le_bytes_mod_order(&value.to_bytes_le()))
}

/// Convert any prime field element to its decimal string.
pub fn field_to_dec_string<F: PrimeField>(f: &F) -> String {
    let bytes = f.into_bigint().to_bytes_le();
    BigUint::from_bytes_le(&bytes).to_string()
}

/// Canonical 32-byte big-endian encoding.
pub fn field_to_be_bytes<F: PrimeField>(f: &F) -> [u8; 32] {
    let bytes = f.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Decode a 32-byte big-endian word, rejecting non-canonical values.
pub fn field_from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F> {
    if bytes.len() != 32 {
        return Err(BlsError::InvalidEncoding(format!(
            "field element must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    field_from_biguint(&BigUint::from_bytes_be(bytes))
}

/// Reduce an arbitrary-length big-endian integer modulo the field order.
pub fn field_from_be_bytes_mod_order<F: PrimeField>(bytes: &[u8]) -> F {
    F::from_be_bytes_mod_order(bytes)
}
