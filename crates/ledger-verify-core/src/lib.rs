//! # Ledger Verify Core
//!
//! Pure primitives for verifying a signed, append-only ledger: transactions,
//! blocks, chains, and the validators that judge them.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over already-constructed values.
//!
//! ## Key Types
//!
//! - [`Transaction`] - A signed transfer of `amount` from `source` to `recipient`
//! - [`Block`] - An ordered batch of transactions linked to its predecessor by hash
//! - [`Chain`] - A sequence of blocks rooted at a genesis block
//!
//! ## Validation Cascade
//!
//! Chain validation calls block validation, which calls transaction validation.
//! Each level has a boolean entry point ([`is_valid_chain`], [`is_valid_block`],
//! [`is_valid_transaction`]) and a diagnostic one returning [`ValidationError`].
//!
//! The signature and digest primitives sit behind the [`SignatureVerifier`] and
//! [`MessageDigest`] traits. See [`ChainValidator`] to plug in other primitives.

pub mod crypto;
pub mod error;
pub mod message;
pub mod types;
pub mod validation;

pub use crypto::{
    Blake3Digest, DigestAlgorithm, Ed25519Verifier, MessageDigest, Sha256Digest, SignatureVerifier,
};
pub use error::ValidationError;
pub use message::{block_message, transaction_message};
pub use types::{Block, Chain, Transaction};
pub use validation::{
    is_valid_block, is_valid_chain, is_valid_transaction, validate_block, validate_chain,
    validate_genesis, validate_link, validate_transaction, ChainValidator,
};
