//! Test fixtures and helpers.
//!
//! Signers and a chain builder for setting up test ledgers. These construct
//! blocks for tests only; nothing here is a block producer.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};
use ledger_verify_core::{
    block_message, transaction_message, Block, Chain, DigestAlgorithm, MessageDigest, Transaction,
};

/// An Ed25519 identity that can sign transactions.
#[derive(Clone)]
pub struct TestSigner {
    signing_key: SigningKey,
}

impl TestSigner {
    /// Create a signer with a random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create with a deterministic key from seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The hex-encoded public key used as the transaction `source`.
    pub fn identity(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign an arbitrary message, returning the hex-encoded signature.
    pub fn sign(&self, message: &str) -> String {
        hex::encode(self.signing_key.sign(message.as_bytes()).to_bytes())
    }

    /// Create a transaction from this signer, signed over the legacy message.
    pub fn transaction(&self, recipient: &str, amount: i64) -> Transaction {
        let mut tx = Transaction {
            amount,
            recipient: recipient.to_string(),
            source: self.identity(),
            signature: String::new(),
        };
        tx.signature = self.sign(&transaction_message(&tx));
        tx
    }
}

impl Default for TestSigner {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Debug for TestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestSigner({})", &self.identity()[..16])
    }
}

/// Create signers with distinct deterministic keys.
pub fn multi_party_signers(count: usize) -> Vec<TestSigner> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            seed[1] = (i >> 8) as u8;
            TestSigner::from_seed(seed)
        })
        .collect()
}

/// Build a block whose hash is computed from its contents.
pub fn seal_block(
    digest: DigestAlgorithm,
    previous_hash: Option<String>,
    nonce: u64,
    transactions: Vec<Transaction>,
) -> Block {
    let mut block = Block {
        previous_hash,
        nonce,
        transactions,
        hash: String::new(),
    };
    block.hash = digest.digest_hex(block_message(&block).as_bytes());
    block
}

/// Builds chains whose blocks are correctly sealed and linked.
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    digest: DigestAlgorithm,
    chain: Chain,
}

impl ChainBuilder {
    /// Start a chain with a SHA-256 genesis block at nonce 0.
    pub fn new() -> Self {
        Self::with_digest(DigestAlgorithm::Sha256)
    }

    /// Start a chain under the given digest with a genesis block at nonce 0.
    pub fn with_digest(digest: DigestAlgorithm) -> Self {
        Self {
            digest,
            chain: Chain::default(),
        }
        .genesis(0)
    }

    /// Replace the genesis block with one at `nonce`, dropping later blocks.
    ///
    /// The genesis hash is `digest("" + "" + nonce)`.
    pub fn genesis(mut self, nonce: u64) -> Self {
        self.chain.blocks = vec![seal_block(self.digest, None, nonce, vec![])];
        self
    }

    /// Append a block linked to the current tip.
    pub fn block(mut self, nonce: u64, transactions: Vec<Transaction>) -> Self {
        let previous_hash = self.chain.tip().map(|b| b.hash.clone());
        let block = seal_block(self.digest, previous_hash, nonce, transactions);
        self.chain.blocks.push(block);
        self
    }

    /// The digest blocks are sealed with.
    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    pub fn build(self) -> Chain {
        self.chain
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_verify_core::{is_valid_block, is_valid_chain, is_valid_transaction, Sha256Digest};

    #[test]
    fn test_signer_transaction_is_valid() {
        let signer = TestSigner::generate();
        let tx = signer.transaction("bob", 10);
        assert_eq!(tx.source, signer.identity());
        assert!(is_valid_transaction(&tx));
    }

    #[test]
    fn test_deterministic_signer() {
        let a = TestSigner::from_seed([0x42; 32]);
        let b = TestSigner::from_seed([0x42; 32]);
        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.transaction("bob", 1), b.transaction("bob", 1));
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_signers(3);

        // Each party has unique keys
        let ids: Vec<_> = parties.iter().map(|p| p.identity()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_genesis_hash() {
        let chain = ChainBuilder::new().genesis(42).build();
        assert_eq!(chain.blocks[0].hash, Sha256Digest.digest_hex(b"42"));
        assert!(chain.blocks[0].is_genesis_shaped());
    }

    #[test]
    fn test_builder_links_blocks() {
        let signer = TestSigner::from_seed([0x01; 32]);
        let chain = ChainBuilder::new()
            .block(1, vec![signer.transaction("bob", 5)])
            .block(2, vec![signer.transaction("carol", 7)])
            .build();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.blocks[1].previous_hash.as_deref(), Some(chain.blocks[0].hash.as_str()));
        assert_eq!(chain.blocks[2].previous_hash.as_deref(), Some(chain.blocks[1].hash.as_str()));
        assert!(is_valid_block(&chain.blocks[2]));
        assert!(is_valid_chain(&chain));
    }
}
