//! Verifier configuration.

use ledger_verify_core::DigestAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the [`Verifier`](crate::Verifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Digest the ledger's block hashes were computed with.
    pub digest: DigestAlgorithm,
    /// Whether audits keep going after the first issue.
    pub collect_all_issues: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            digest: DigestAlgorithm::Sha256,
            collect_all_issues: true,
        }
    }
}

impl VerifierConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
