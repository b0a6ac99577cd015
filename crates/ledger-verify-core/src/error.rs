//! Error types for ledger validation.

use thiserror::Error;

/// Reasons a transaction, block, or chain fails validation.
///
/// The boolean entry points collapse every variant to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("transaction amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("signature verification failed")]
    SignatureFailed,

    #[error("block hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("invalid transaction at index {index}: {source}")]
    InvalidTransaction {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("chain has no genesis block")]
    EmptyChain,

    #[error("genesis block must have no transactions, found {0}")]
    GenesisHasTransactions(usize),

    #[error("genesis block must have a null previous hash")]
    GenesisHasPreviousHash,

    #[error("block {index} has a null previous hash")]
    MissingPreviousHash { index: usize },

    #[error("block {index} is not linked: expected previous hash {expected}, got {actual}")]
    BrokenLink {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("invalid block at index {index}: {source}")]
    InvalidBlock {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// The block index this error refers to, if any.
    ///
    /// An empty chain has no block to point at.
    pub fn block_index(&self) -> Option<usize> {
        match self {
            ValidationError::MissingPreviousHash { index }
            | ValidationError::BrokenLink { index, .. }
            | ValidationError::InvalidBlock { index, .. } => Some(*index),
            ValidationError::GenesisHasTransactions(_) | ValidationError::GenesisHasPreviousHash => {
                Some(0)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_display() {
        let err = ValidationError::InvalidBlock {
            index: 2,
            source: Box::new(ValidationError::InvalidTransaction {
                index: 0,
                source: Box::new(ValidationError::NonPositiveAmount(-3)),
            }),
        };
        assert_eq!(
            err.to_string(),
            "invalid block at index 2: invalid transaction at index 0: transaction amount must be positive, got -3"
        );
    }

    #[test]
    fn test_block_index() {
        assert_eq!(ValidationError::EmptyChain.block_index(), None);
        assert_eq!(ValidationError::GenesisHasPreviousHash.block_index(), Some(0));
        assert_eq!(ValidationError::MissingPreviousHash { index: 4 }.block_index(), Some(4));
        assert_eq!(ValidationError::SignatureFailed.block_index(), None);
    }
}
