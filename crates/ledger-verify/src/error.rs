//! Error types for the verifier.

use ledger_verify_core::ValidationError;
use thiserror::Error;

/// Errors that can occur in verifier operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The value failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for verifier operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
