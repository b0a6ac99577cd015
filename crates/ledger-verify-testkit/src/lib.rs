//! # Ledger Verify Testkit
//!
//! Testing utilities for ledger verification.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Signers and a chain builder for setting up test ledgers
//! - **Tamper**: Pure transformations that corrupt a copy of a chain
//! - **Generators**: Proptest strategies for property-based testing
//! - **Golden vectors**: JSON chains with the verdict every implementation must reach
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ledger_verify_testkit::{ChainBuilder, TestSigner};
//!
//! let alice = TestSigner::from_seed([0x42; 32]);
//! let chain = ChainBuilder::new()
//!     .block(1, vec![alice.transaction("bob", 10)])
//!     .build();
//! assert!(ledger_verify::is_valid_chain(&chain));
//! ```
//!
//! ## Breaking a Chain
//!
//! ```rust
//! use ledger_verify_testkit::{break_chain, ChainBuilder};
//!
//! let chain = ChainBuilder::new().block(1, vec![]).build();
//! let broken = break_chain(&chain);
//! assert!(!ledger_verify::is_valid_chain(&broken));
//! assert!(ledger_verify::is_valid_chain(&chain));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ledger_verify_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn chain_generation_is_deterministic(params: ChainParams) {
//!         prop_assert_eq!(chain_from_params(&params), chain_from_params(&params));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod tamper;
pub mod vectors;

pub use fixtures::{multi_party_signers, seal_block, ChainBuilder, TestSigner};
pub use generators::{chain_from_params, ChainParams};
pub use tamper::{break_chain, Tamper};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
