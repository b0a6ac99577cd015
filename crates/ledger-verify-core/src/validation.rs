//! Validation cascade: transaction, block, chain.
//!
//! Every check is a pure function of its input. The `validate_*` functions
//! return the first reason a value is rejected; the `is_valid_*` functions
//! collapse that to a boolean.

use crate::crypto::{Ed25519Verifier, MessageDigest, Sha256Digest, SignatureVerifier};
use crate::error::ValidationError;
use crate::message::{block_message, transaction_message};
use crate::types::{Block, Chain, Transaction};

/// Validates ledger values against a pair of primitives.
///
/// The free functions in this module use [`ChainValidator::standard`]
/// (Ed25519 signatures, SHA-256 block hashes).
#[derive(Clone, Copy)]
pub struct ChainValidator<'a> {
    verifier: &'a dyn SignatureVerifier,
    digest: &'a dyn MessageDigest,
}

impl<'a> ChainValidator<'a> {
    /// Create a validator over the given primitives.
    pub const fn new(verifier: &'a dyn SignatureVerifier, digest: &'a dyn MessageDigest) -> Self {
        Self { verifier, digest }
    }

    /// The hash a block must record, recomputed from its contents.
    pub fn expected_hash(&self, block: &Block) -> String {
        self.digest.digest_hex(block_message(block).as_bytes())
    }

    /// Validate a single transaction.
    ///
    /// Rejects non-positive amounts before checking the signature over
    /// `source + recipient + amount` under `source`.
    pub fn validate_transaction(&self, tx: &Transaction) -> Result<(), ValidationError> {
        if tx.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount(tx.amount));
        }

        let message = transaction_message(tx);
        if !self.verifier.verify(&tx.source, message.as_bytes(), &tx.signature) {
            return Err(ValidationError::SignatureFailed);
        }

        Ok(())
    }

    /// Validate a block's recorded hash and every transaction it contains.
    ///
    /// Genesis is not special-cased here; an empty transaction list is
    /// structurally fine.
    pub fn validate_block(&self, block: &Block) -> Result<(), ValidationError> {
        let expected = self.expected_hash(block);
        if expected != block.hash {
            return Err(ValidationError::HashMismatch {
                expected,
                actual: block.hash.clone(),
            });
        }

        for (index, tx) in block.transactions.iter().enumerate() {
            self.validate_transaction(tx)
                .map_err(|e| ValidationError::InvalidTransaction {
                    index,
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    /// Validate a whole chain.
    ///
    /// 1. Genesis exists, has no transactions and a null previous hash.
    /// 2. Every later block links to its predecessor's recorded hash.
    /// 3. Every later block passes [`validate_block`](Self::validate_block).
    ///
    /// An empty chain has no genesis and is rejected.
    pub fn validate_chain(&self, chain: &Chain) -> Result<(), ValidationError> {
        validate_genesis(chain)?;

        for (index, pair) in chain.blocks.windows(2).enumerate() {
            validate_link(index + 1, &pair[0], &pair[1])?;
        }

        for (index, block) in chain.blocks.iter().enumerate().skip(1) {
            self.validate_block(block)
                .map_err(|e| ValidationError::InvalidBlock {
                    index,
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    pub fn is_valid_transaction(&self, tx: &Transaction) -> bool {
        self.validate_transaction(tx).is_ok()
    }

    pub fn is_valid_block(&self, block: &Block) -> bool {
        self.validate_block(block).is_ok()
    }

    pub fn is_valid_chain(&self, chain: &Chain) -> bool {
        self.validate_chain(chain).is_ok()
    }
}

impl ChainValidator<'static> {
    /// Ed25519 signatures and SHA-256 block hashes.
    pub const fn standard() -> Self {
        ChainValidator::new(&Ed25519Verifier, &Sha256Digest)
    }
}

impl Default for ChainValidator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Check the genesis block's shape.
pub fn validate_genesis(chain: &Chain) -> Result<(), ValidationError> {
    let genesis = chain.genesis().ok_or(ValidationError::EmptyChain)?;

    if !genesis.transactions.is_empty() {
        return Err(ValidationError::GenesisHasTransactions(genesis.transactions.len()));
    }
    if genesis.previous_hash.is_some() {
        return Err(ValidationError::GenesisHasPreviousHash);
    }

    Ok(())
}

/// Check that `block` (at `index`) points at `prev` by value.
pub fn validate_link(index: usize, prev: &Block, block: &Block) -> Result<(), ValidationError> {
    match &block.previous_hash {
        None => Err(ValidationError::MissingPreviousHash { index }),
        Some(hash) if *hash != prev.hash => Err(ValidationError::BrokenLink {
            index,
            expected: prev.hash.clone(),
            actual: hash.clone(),
        }),
        Some(_) => Ok(()),
    }
}

/// Validate a transaction with the standard primitives.
pub fn validate_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    ChainValidator::standard().validate_transaction(tx)
}

/// Validate a block with the standard primitives.
pub fn validate_block(block: &Block) -> Result<(), ValidationError> {
    ChainValidator::standard().validate_block(block)
}

/// Validate a chain with the standard primitives.
pub fn validate_chain(chain: &Chain) -> Result<(), ValidationError> {
    ChainValidator::standard().validate_chain(chain)
}

/// `true` iff the transaction has a positive amount and an authentic signature.
pub fn is_valid_transaction(tx: &Transaction) -> bool {
    validate_transaction(tx).is_ok()
}

/// `true` iff the block's hash matches its contents and all its transactions are valid.
pub fn is_valid_block(block: &Block) -> bool {
    validate_block(block).is_ok()
}

/// `true` iff the chain is genesis-shaped, fully linked, and every block is valid.
pub fn is_valid_chain(chain: &Chain) -> bool {
    validate_chain(chain).is_ok()
}
