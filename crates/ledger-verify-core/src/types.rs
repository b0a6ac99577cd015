//! Ledger data model: transactions, blocks, and chains.
//!
//! Field names serialize in camelCase so that ledgers exported by JSON-based
//! producers deserialize unchanged.

use serde::{Deserialize, Serialize};

/// A signed transfer of `amount` from `source` to `recipient`.
///
/// Transactions are immutable once signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transferred quantity. Only strictly positive amounts are valid.
    ///
    /// Integral only: a JSON ledger carrying a fractional amount such as
    /// `2.5` fails to deserialize rather than producing a verdict.
    pub amount: i64,

    /// Recipient identity.
    pub recipient: String,

    /// Signer identity: hex-encoded Ed25519 public key.
    pub source: String,

    /// Hex-encoded signature over `source + recipient + amount`.
    pub signature: String,
}

/// A batch of transactions linked to its predecessor by hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Hash of the prior block. `None` only for genesis.
    pub previous_hash: Option<String>,

    /// Opaque value mixed into the block digest.
    pub nonce: u64,

    /// Ordered transactions. Order affects the block digest.
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// The digest this block claims to have.
    pub hash: String,
}

impl Block {
    /// Check if this block has the shape required of a genesis block:
    /// no transactions and a null previous hash.
    pub fn is_genesis_shaped(&self) -> bool {
        self.transactions.is_empty() && self.previous_hash.is_none()
    }
}

/// A sequence of blocks. Position 0 is the genesis block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain {
    pub blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain from its blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The genesis block, if the chain has any blocks.
    pub fn genesis(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// The most recently appended block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Block>> for Chain {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
