//! Error types for test-vector generation

use bls_core::BlsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("BLS error: {0}")]
    Bls(#[from] BlsError),

    #[error("Invalid operator address: {0}")]
    InvalidAddress(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Message does not match the operator and public keys in the vector")]
    MessageMismatch,

    #[error("Freshly produced signature failed verification")]
    SelfCheckFailed,
}

pub type Result<T> = std::result::Result<T, VectorError>;
