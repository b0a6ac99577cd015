//! Golden test vectors in the legacy JSON ledger format.
//!
//! Each vector is a chain as a JSON document (camelCase fields, `null` for
//! the genesis previous hash) together with the verdict every implementation
//! must reach.

use ledger_verify_core::{is_valid_chain, Chain};

use crate::fixtures::{ChainBuilder, TestSigner};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The chain, as JSON.
    pub json: String,
    /// Whether the chain must validate.
    pub expected_valid: bool,
}

impl GoldenVector {
    /// Parse the vector's chain.
    pub fn chain(&self) -> serde_json::Result<Chain> {
        serde_json::from_str(&self.json)
    }
}

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Genesis only",
            // Genesis hash is not checked against its contents.
            json: format!(
                r#"{{"blocks":[{{"previousHash":null,"nonce":0,"transactions":[],"hash":"{EMPTY_SHA256}"}}]}}"#
            ),
            expected_valid: true,
        },
        GoldenVector {
            name: "No blocks",
            json: r#"{"blocks":[]}"#.to_string(),
            expected_valid: false,
        },
        GoldenVector {
            name: "Genesis with previous hash",
            json: format!(
                r#"{{"blocks":[{{"previousHash":"{EMPTY_SHA256}","nonce":0,"transactions":[],"hash":"{EMPTY_SHA256}"}}]}}"#
            ),
            expected_valid: false,
        },
        GoldenVector {
            name: "Second block with null previous hash",
            json: format!(
                r#"{{"blocks":[
                    {{"previousHash":null,"nonce":0,"transactions":[],"hash":"{EMPTY_SHA256}"}},
                    {{"previousHash":null,"nonce":1,"transactions":[],"hash":"{EMPTY_SHA256}"}}
                ]}}"#
            ),
            expected_valid: false,
        },
        GoldenVector {
            name: "Second block with malformed signature",
            json: format!(
                r#"{{"blocks":[
                    {{"previousHash":null,"nonce":0,"transactions":[],"hash":"{EMPTY_SHA256}"}},
                    {{"previousHash":"{EMPTY_SHA256}","nonce":1,"transactions":[
                        {{"amount":5,"recipient":"bob","source":"zz","signature":"zz"}}
                    ],"hash":"{EMPTY_SHA256}"}}
                ]}}"#
            ),
            expected_valid: false,
        },
        GoldenVector {
            name: "Signed two-block chain",
            json: signed_chain_json(),
            expected_valid: true,
        },
    ]
}

/// A valid chain signed by a fixed seed, rendered to JSON.
fn signed_chain_json() -> String {
    let alice = TestSigner::from_seed([0x42; 32]);
    let chain = ChainBuilder::new()
        .genesis(1736870400)
        .block(7, vec![alice.transaction("bob", 25), alice.transaction("carol", 3)])
        .build();
    serde_json::to_string(&chain).expect("chain serializes to JSON")
}

/// Check every golden vector against the standard validators.
///
/// Returns (name, matches expected verdict, actual verdict).
pub fn verify_all_vectors() -> Vec<(String, bool, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = v.chain().map(|chain| is_valid_chain(&chain)).unwrap_or(false);
            (v.name.to_string(), actual == v.expected_valid, actual)
        })
        .collect()
}
