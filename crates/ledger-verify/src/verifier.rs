//! The Verifier: configured entry point for ledger validation.
//!
//! Wraps the core validation cascade with a configured digest, logging of
//! rejections, and full-chain audits.

use std::fmt;

use ledger_verify_core::{
    validate_genesis, validate_link, Block, Chain, ChainValidator, Ed25519Verifier, Transaction,
    ValidationError,
};

use rayon::prelude::*;

use crate::config::VerifierConfig;
use crate::error::Result;

/// A single problem found by an audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainIssue {
    /// Index of the offending block, or `None` for a chain with no blocks.
    pub index: Option<usize>,
    pub error: ValidationError,
}

impl From<ValidationError> for ChainIssue {
    fn from(error: ValidationError) -> Self {
        Self {
            index: error.block_index(),
            error,
        }
    }
}

impl fmt::Display for ChainIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "block {}: {}", index, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Outcome of auditing a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Number of blocks in the audited chain.
    pub block_count: usize,
    /// Every issue found, in chain order.
    pub issues: Vec<ChainIssue>,
}

impl ChainReport {
    /// Check if the audit found nothing wrong.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Block indices with at least one issue, deduplicated, ascending.
    pub fn failing_blocks(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.issues.iter().filter_map(|issue| issue.index).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

impl fmt::Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "chain of {} blocks is valid", self.block_count);
        }
        write!(f, "chain of {} blocks has {} issue(s)", self.block_count, self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

/// Validates transactions, blocks and chains under a [`VerifierConfig`].
///
/// Holds no state across calls; a single instance may be shared between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    config: VerifierConfig,
    signatures: Ed25519Verifier,
}

impl Verifier {
    /// Create a verifier with the given configuration.
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            config,
            signatures: Ed25519Verifier,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// The underlying core validator.
    pub fn validator(&self) -> ChainValidator<'_> {
        ChainValidator::new(&self.signatures, &self.config.digest)
    }

    /// `true` iff the transaction has a positive amount and an authentic signature.
    pub fn verify_transaction(&self, tx: &Transaction) -> bool {
        match self.validator().validate_transaction(tx) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(recipient = %tx.recipient, "transaction rejected: {}", e);
                false
            }
        }
    }

    /// `true` iff the block's hash matches its contents and all its transactions are valid.
    pub fn verify_block(&self, block: &Block) -> bool {
        match self.validator().validate_block(block) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(hash = %block.hash, "block rejected: {}", e);
                false
            }
        }
    }

    /// `true` iff the chain is genesis-shaped, fully linked, and every block is valid.
    pub fn verify_chain(&self, chain: &Chain) -> bool {
        match self.validator().validate_chain(chain) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(blocks = chain.len(), "chain rejected: {}", e);
                false
            }
        }
    }

    /// Validate a chain, returning the first issue as an error.
    pub fn require_valid_chain(&self, chain: &Chain) -> Result<()> {
        self.validator().validate_chain(chain)?;
        Ok(())
    }

    /// Verify several chains on the rayon pool. Results are in input order.
    pub fn verify_chains(&self, chains: &[Chain]) -> Vec<bool> {
        chains.par_iter().map(|chain| self.verify_chain(chain)).collect()
    }

    /// Audit a chain, collecting issues instead of stopping at the first.
    ///
    /// With `collect_all_issues` disabled the audit stops at the first issue.
    /// Either way, the report is valid exactly when [`verify_chain`](Self::verify_chain)
    /// returns `true`.
    pub fn audit_chain(&self, chain: &Chain) -> ChainReport {
        let mut report = ChainReport {
            block_count: chain.len(),
            issues: Vec::new(),
        };
        let stop_early = !self.config.collect_all_issues;

        if let Err(e) = validate_genesis(chain) {
            let empty = e == ValidationError::EmptyChain;
            report.issues.push(e.into());
            if empty || stop_early {
                return self.finish(report);
            }
        }

        let validator = self.validator();
        for (index, block) in chain.blocks.iter().enumerate().skip(1) {
            if let Err(e) = validate_link(index, &chain.blocks[index - 1], block) {
                report.issues.push(e.into());
                if stop_early {
                    return self.finish(report);
                }
            }

            if let Err(e) = validator.validate_block(block) {
                report.issues.push(ChainIssue {
                    index: Some(index),
                    error: ValidationError::InvalidBlock {
                        index,
                        source: Box::new(e),
                    },
                });
                if stop_early {
                    return self.finish(report);
                }
            }
        }

        self.finish(report)
    }

    fn finish(&self, report: ChainReport) -> ChainReport {
        if report.is_valid() {
            tracing::debug!(blocks = report.block_count, digest = %self.config.digest, "audit passed");
        } else {
            tracing::info!(
                blocks = report.block_count,
                issues = report.issues.len(),
                "audit found issues"
            );
        }
        report
    }
}
