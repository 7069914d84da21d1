//! Error types for BLS over BN254

use thiserror::Error;

/// Every failure in this crate is local and deterministic: retrying with the
/// same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlsError {
    #[error("Division by zero in field inverse")]
    DivisionByZero,

    #[error("Point is not on the curve or not in the prime-order subgroup")]
    InvalidCurvePoint,

    #[error("Point at infinity has no affine coordinates")]
    PointAtInfinity,

    #[error("Hash-to-curve found no point after {attempts} attempts")]
    HashToCurveExhausted { attempts: usize },

    #[error("Cannot aggregate an empty sequence")]
    EmptyAggregationInput,

    #[error("Secret key must be a non-zero scalar below the group order")]
    InvalidSecretKey,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, BlsError>;
