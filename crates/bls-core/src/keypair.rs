// Key generation for BLS signatures over BN254.
//
// Secret key:  random non-zero scalar sk in Fr
// Public key:  PK = sk * G2             (verification key, size-optimized)
//              PK_G1 = sk * G1          (gas-optimized variant, used on-chain
//                                        for cheap key aggregation)

use std::fmt;

use ark_bn254::Fr;
use ark_ff::Zero;
use ark_std::UniformRand;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::curve::{G1Point, G2Point};
use crate::error::{BlsError, Result};
use crate::field::field_from_dec_str;

/// A BLS secret scalar. Never part of any serialized output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Fr);

impl SecretKey {
    /// Sample a uniformly random non-zero scalar.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let s = Fr::rand(rng);
            if !s.is_zero() {
                return SecretKey(s);
            }
        }
    }

    pub fn from_scalar(s: Fr) -> Result<Self> {
        if s.is_zero() {
            return Err(BlsError::InvalidSecretKey);
        }
        Ok(SecretKey(s))
    }

    pub fn from_u64(v: u64) -> Result<Self> {
        Self::from_scalar(Fr::from(v))
    }

    /// Parse a decimal scalar; values at or above r are rejected.
    pub fn from_dec_str(s: &str) -> Result<Self> {
        let scalar = field_from_dec_str::<Fr>(s).map_err(|_| BlsError::InvalidSecretKey)?;
        Self::from_scalar(scalar)
    }

    pub fn scalar(&self) -> &Fr {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// A BLS public key in G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub G2Point);

/// A BLS public key in G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKeyG1(pub G1Point);

impl PublicKey {
    pub fn from_secret_key(sk: &SecretKey) -> Self {
        PublicKey(G2Point::generator().mul(sk.scalar()))
    }

    pub fn point(&self) -> &G2Point {
        &self.0
    }
}

impl PublicKeyG1 {
    pub fn from_secret_key(sk: &SecretKey) -> Self {
        PublicKeyG1(G1Point::generator().mul(sk.scalar()))
    }

    pub fn point(&self) -> &G1Point {
        &self.0
    }
}

/// A secret key with both of its public keys.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub sk: SecretKey,
    pub pk: PublicKey,
    pub pk_g1: PublicKeyG1,
}

impl KeyPair {
    /// Generate a fresh keypair using OS-seeded randomness.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    pub fn generate_with_rng<R: RngCore>(rng: &mut R) -> Self {
        Self::from_secret_key(SecretKey::random(rng))
    }

    /// Derive both public keys from an existing secret.
    pub fn from_secret_key(sk: SecretKey) -> Self {
        let pk = PublicKey::from_secret_key(&sk);
        let pk_g1 = PublicKeyG1::from_secret_key(&sk);
        KeyPair { sk, pk, pk_g1 }
    }
}

/// Generate a secret key and its G2 public key.
pub fn keygen() -> (SecretKey, PublicKey) {
    let kp = KeyPair::generate();
    (kp.sk, kp.pk)
}
