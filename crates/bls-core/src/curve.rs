// crates/bls-core/src/curve.rs
//
// BN254 group arithmetic in Jacobian coordinates.
//
// Both groups are short Weierstrass curves with a = 0:
//   G1:  y^2 = x^3 + 3            over Fq
//   G2:  y^2 = x^3 + 3/(9 + u)    over Fq2 (the D-type sextic twist)
//
// A Jacobian triple (X, Y, Z) represents the affine point (X/Z^2, Y/Z^3);
// Z = 0 is the point at infinity. Equality compares the represented affine
// points, never the raw triples.
//
// Points can only be built through validating constructors, so the group law
// below never sees an off-curve input and is infallible.

use std::fmt::Debug;
use std::marker::PhantomData;

use ark_bn254::{Fq, Fq2, Fr};
use ark_ff::{BigInteger, Field, MontFp, One, PrimeField, Zero};

use crate::error::{BlsError, Result};
use crate::field::CurveField;

/// G1 generator (1, 2)
pub const G1_GENERATOR_X: Fq = MontFp!("1");
pub const G1_GENERATOR_Y: Fq = MontFp!("2");
pub const G1_COEFF_B: Fq = MontFp!("3");

/// G2 generator as specified in EIP-197
pub const G2_GENERATOR_X: Fq2 = Fq2::new(
    MontFp!("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
    MontFp!("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
);
pub const G2_GENERATOR_Y: Fq2 = Fq2::new(
    MontFp!("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
    MontFp!("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
);

/// b' = 3 / (9 + u)
pub const G2_COEFF_B: Fq2 = Fq2::new(
    MontFp!("19485874751759354771024239261021720505790618469301721065564631296452457478373"),
    MontFp!("266929791119991161246907387137283842545076965332900288569378510910307636690"),
);

/// Parameters of one of the two BN254 groups.
pub trait CurveConfig: Copy + Clone + Debug + PartialEq + Eq + 'static {
    type Base: CurveField;

    fn coeff_b() -> Self::Base;

    fn generator_affine() -> (Self::Base, Self::Base);

    /// Whether an on-curve point lies in the order-r subgroup.
    fn in_prime_subgroup(_point: &JacobianPoint<Self>) -> bool {
        true
    }
}

/// G1 over Fq. Cofactor 1: every curve point is in the subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Config;

impl CurveConfig for G1Config {
    type Base = Fq;

    fn coeff_b() -> Fq {
        G1_COEFF_B
    }

    fn generator_affine() -> (Fq, Fq) {
        (G1_GENERATOR_X, G1_GENERATOR_Y)
    }
}

/// G2 over Fq2. The twist has a large cofactor, so subgroup membership is
/// checked by r * P == O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Config;

impl CurveConfig for G2Config {
    type Base = Fq2;

    fn coeff_b() -> Fq2 {
        G2_COEFF_B
    }

    fn generator_affine() -> (Fq2, Fq2) {
        (G2_GENERATOR_X, G2_GENERATOR_Y)
    }

    fn in_prime_subgroup(point: &JacobianPoint<Self>) -> bool {
        point.mul_bigint(Fr::MODULUS).is_identity()
    }
}

pub type G1Point = JacobianPoint<G1Config>;
pub type G2Point = JacobianPoint<G2Config>;

/// A point in Jacobian coordinates.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<C: CurveConfig> {
    x: C::Base,
    y: C::Base,
    z: C::Base,
    _config: PhantomData<C>,
}

impl<C: CurveConfig> JacobianPoint<C> {
    fn from_jacobian(x: C::Base, y: C::Base, z: C::Base) -> Self {
        JacobianPoint {
            x,
            y,
            z,
            _config: PhantomData,
        }
    }

    /// The point at infinity (1, 1, 0).
    pub fn identity() -> Self {
        Self::from_jacobian(C::Base::one(), C::Base::one(), C::Base::zero())
    }

    pub fn generator() -> Self {
        let (x, y) = C::generator_affine();
        Self::from_jacobian(x, y, C::Base::one())
    }

    /// Build a point from affine coordinates, rejecting anything off the curve
    /// or outside the prime-order subgroup.
    pub fn from_affine(x: C::Base, y: C::Base) -> Result<Self> {
        let point = Self::from_jacobian(x, y, C::Base::one());
        if !point.is_on_curve() || !C::in_prime_subgroup(&point) {
            return Err(BlsError::InvalidCurvePoint);
        }
        Ok(point)
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Y^2 = X^3 + b*Z^6, the Jacobian form of y^2 = x^3 + b.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        self.y.square() == self.x.square() * self.x + C::coeff_b() * z6
    }

    /// Affine (x, y). Fails on the point at infinity.
    pub fn normalize(&self) -> Result<(C::Base, C::Base)> {
        if self.is_identity() {
            return Err(BlsError::PointAtInfinity);
        }
        let z_inv = self.z.invert()?;
        let z_inv2 = z_inv.square();
        Ok((self.x * z_inv2, self.y * z_inv2 * z_inv))
    }

    pub fn negate(&self) -> Self {
        Self::from_jacobian(self.x, -self.y, self.z)
    }

    /// dbl-2009-l (a = 0)
    pub fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();
        Self::from_jacobian(x3, y3, z3)
    }

    /// add-2007-bl, falling back to doubling when both inputs coincide.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::identity()
            };
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;
        Self::from_jacobian(x3, y3, z3)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Scalar multiplication by an element of Fr.
    pub fn mul(&self, scalar: &Fr) -> Self {
        self.mul_bigint(scalar.into_bigint())
    }

    /// Left-to-right double-and-add over a little-endian limb integer.
    ///
    /// Unlike `mul`, the multiplier is not reduced mod r, so `mul_bigint(r)`
    /// exercises the group order itself.
    pub fn mul_bigint<B: BigInteger>(&self, k: B) -> Self {
        let mut result = Self::identity();
        for bit in k.to_bits_be() {
            result = result.double();
            if bit {
                result = result.add(self);
            }
        }
        result
    }
}

impl<C: CurveConfig> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        // x1/z1^2 == x2/z2^2 and y1/z1^3 == y2/z2^3, cross-multiplied
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        self.x * z2z2 == other.x * z1z1 && self.y * z2z2 * other.z == other.y * z1z1 * self.z
    }
}

impl<C: CurveConfig> Eq for JacobianPoint<C> {}

impl<C: CurveConfig> Default for JacobianPoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Raw Jacobian coordinates; only for tests that need two different triples
/// of one affine point.
#[cfg(test)]
impl<C: CurveConfig> JacobianPoint<C> {
    pub(crate) fn rescaled(&self, lambda: C::Base) -> Self {
        let l2 = lambda.square();
        Self::from_jacobian(self.x * l2, self.y * l2 * lambda, self.z * lambda)
    }
}
