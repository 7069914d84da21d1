//! Optimal-ate pairing on BN254
//!
//! The Miller loop and final exponentiation are arkworks'. This module only
//! moves validated points across and exposes the two checks verification
//! needs: equality of two pairings, and a product-of-pairings check with
//! the same semantics as the EVM pairing precompile.

use ark_bn254::{Bn254, Fr, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::{Field, One, PrimeField};

use crate::curve::{G1Point, G2Point};
use crate::error::{BlsError, Result};

/// An element of the order-r target group inside Fq12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGroupElement(PairingOutput<Bn254>);

impl TargetGroupElement {
    /// self^k
    pub fn pow(&self, k: &Fr) -> Self {
        TargetGroupElement(PairingOutput(self.0 .0.pow(k.into_bigint())))
    }

    pub fn is_one(&self) -> bool {
        self.0 .0.is_one()
    }
}

fn to_ark_g1(p: &G1Point) -> Result<G1Affine> {
    if !p.is_on_curve() {
        return Err(BlsError::InvalidCurvePoint);
    }
    if p.is_identity() {
        return Ok(G1Affine::identity());
    }
    let (x, y) = p.normalize()?;
    Ok(G1Affine::new_unchecked(x, y))
}

fn to_ark_g2(q: &G2Point) -> Result<G2Affine> {
    if !q.is_on_curve() {
        return Err(BlsError::InvalidCurvePoint);
    }
    if q.is_identity() {
        return Ok(G2Affine::identity());
    }
    let (x, y) = q.normalize()?;
    Ok(G2Affine::new_unchecked(x, y))
}

/// e(P, Q)
pub fn pair(p: &G1Point, q: &G2Point) -> Result<TargetGroupElement> {
    let p = to_ark_g1(p)?;
    let q = to_ark_g2(q)?;
    Ok(TargetGroupElement(Bn254::pairing(p, q)))
}

/// Returns true if the product of e(P_i, Q_i) is one. An empty product is one.
pub fn pairing_check(pairs: &[(G1Point, G2Point)]) -> Result<bool> {
    if pairs.is_empty() {
        return Ok(true);
    }

    let mut g1 = Vec::with_capacity(pairs.len());
    let mut g2 = Vec::with_capacity(pairs.len());
    for (p, q) in pairs {
        g1.push(to_ark_g1(p)?);
        g2.push(to_ark_g2(q)?);
    }

    Ok(TargetGroupElement(Bn254::multi_pairing(g1, g2)).is_one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilinearity() {
        let p = G1Point::generator();
        let q = G2Point::generator();
        let a = Fr::from(69u64);
        let b = Fr::from(1234567u64);

        let base = pair(&p, &q).unwrap();
        let left = pair(&p.mul(&a), &q).unwrap();
        let right = pair(&p, &q.mul(&a)).unwrap();
        assert_eq!(left, right);
        assert_eq!(left, base.pow(&a));

        let both = pair(&p.mul(&a), &q.mul(&b)).unwrap();
        assert_eq!(both, base.pow(&(a * b)));
    }

    #[test]
    fn non_degenerate() {
        let e = pair(&G1Point::generator(), &G2Point::generator()).unwrap();
        assert!(!e.is_one());
        assert!(e.pow(&Fr::from(0u64)).is_one());
    }

    #[test]
    fn identity_pairs_to_one() {
        assert!(pair(&G1Point::identity(), &G2Point::generator())
            .unwrap()
            .is_one());
        assert!(pair(&G1Point::generator(), &G2Point::identity())
            .unwrap()
            .is_one());
    }

    #[test]
    fn pairing_check_cancels_negation() {
        let p = G1Point::generator().mul(&Fr::from(5u64));
        let q = G2Point::generator().mul(&Fr::from(7u64));
        // e(5G1, 7G2) * e(-35G1, G2) == 1
        let pairs = [
            (p, q),
            (G1Point::generator().mul(&Fr::from(35u64)).negate(), G2Point::generator()),
        ];
        assert!(pairing_check(&pairs).unwrap());

        let bad = [(p, q), (G1Point::generator().negate(), G2Point::generator())];
        assert!(!pairing_check(&bad).unwrap());
    }

    #[test]
    fn empty_pairing_check_passes() {
        assert!(pairing_check(&[]).unwrap());
    }
}
