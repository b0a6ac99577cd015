//! # Ledger Verify
//!
//! The API for checking a signed, append-only ledger: is a transaction
//! authentic, is a block's hash consistent with its contents, is a chain an
//! untampered sequence rooted at a genesis block.
//!
//! ## Overview
//!
//! - **Transactions** are signed by their `source` over `source + recipient + amount`
//! - **Blocks** record `digest(previous_hash + signatures + nonce)` as their hash
//! - **Chains** start at a genesis block and link each block to its predecessor
//!
//! Validation never mutates its input and never fails for a well-typed value;
//! every question resolves to `true` or `false`. Use [`Verifier::audit_chain`]
//! to see why a chain was rejected.
//!
//! ## Usage
//!
//! ```rust
//! use ledger_verify::{Chain, Verifier, VerifierConfig};
//!
//! let verifier = Verifier::new(VerifierConfig::default());
//!
//! // A chain without a genesis block is never valid.
//! let chain = Chain::default();
//! assert!(!verifier.verify_chain(&chain));
//!
//! let report = verifier.audit_chain(&chain);
//! assert_eq!(report.issues.len(), 1);
//! ```
//!
//! ## Re-exports
//!
//! - `ledger_verify::core` - Core types, primitives and validators

pub mod config;
pub mod error;
pub mod verifier;

// Re-export component crates
pub use ledger_verify_core as core;

// Re-export main types for convenience
pub use config::VerifierConfig;
pub use error::{Result, VerifyError};
pub use verifier::{ChainIssue, ChainReport, Verifier};

// Re-export commonly used core types
pub use ledger_verify_core::{
    is_valid_block, is_valid_chain, is_valid_transaction, Block, Chain, DigestAlgorithm,
    Transaction, ValidationError,
};
