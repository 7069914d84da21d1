pub mod aggregate;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod field;
pub mod hash;
pub mod keypair;
pub mod pairing;
pub mod sign;
pub mod verify;

// Re-exports for convenience
pub use aggregate::{
    aggregate_public_keys, aggregate_public_keys_g1, aggregate_signatures, AggregatePublicKey,
    AggregateSignature,
};
pub use curve::{G1Point, G2Point};
pub use encoding::G2CoordinateOrder;
pub use error::{BlsError, Result};
pub use hash::{hash_message_to_point, hash_to_point, keccak256};
pub use keypair::{keygen, KeyPair, PublicKey, PublicKeyG1, SecretKey};
pub use pairing::{pair, pairing_check, TargetGroupElement};
pub use sign::{sign, Signature};
pub use verify::{verify, verify_aggregate, verify_key_consistency, VerifyResult};
