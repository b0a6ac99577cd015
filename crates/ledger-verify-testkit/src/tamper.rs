//! Adversarial tampering with chains.
//!
//! Every function here takes a chain by reference and returns a new, tampered
//! copy. The input is never modified.

use ledger_verify_core::{Block, Chain};

/// A single way to corrupt a chain.
///
/// Variants targeting a block act on the tip; variants targeting a
/// transaction act on the tip's first transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tamper {
    /// Change one character of the tip's recorded hash.
    BlockHash,
    /// Change the amount of a signed transaction.
    TransactionAmount,
    /// Change one character of a transaction signature.
    Signature,
    /// Change the tip's nonce.
    Nonce,
    /// Point the tip at a hash that is not its predecessor's.
    PreviousHash,
    /// Null out the tip's previous hash.
    NullPreviousHash,
    /// Reverse the order of the tip's transactions.
    ReorderTransactions,
    /// Give the genesis block a previous hash.
    GenesisPreviousHash,
}

impl Tamper {
    pub const ALL: [Tamper; 8] = [
        Tamper::BlockHash,
        Tamper::TransactionAmount,
        Tamper::Signature,
        Tamper::Nonce,
        Tamper::PreviousHash,
        Tamper::NullPreviousHash,
        Tamper::ReorderTransactions,
        Tamper::GenesisPreviousHash,
    ];

    /// Apply this tamper to a copy of `chain`.
    ///
    /// Returns `None` when the chain has nothing this tamper can act on, or
    /// when the change would leave the chain's content unchanged.
    pub fn apply(self, chain: &Chain) -> Option<Chain> {
        let mut tampered = chain.clone();

        match self {
            Tamper::GenesisPreviousHash => {
                let genesis = tampered.blocks.first_mut()?;
                genesis.previous_hash = Some(flipped(&genesis.hash));
            }
            Tamper::BlockHash => flip_first_char(&mut tip_mut(&mut tampered)?.hash),
            Tamper::TransactionAmount => {
                let tx = tip_mut(&mut tampered)?.transactions.first_mut()?;
                tx.amount = if tx.amount == i64::MAX { tx.amount - 1 } else { tx.amount + 1 };
            }
            Tamper::Signature => {
                let tx = tip_mut(&mut tampered)?.transactions.first_mut()?;
                flip_first_char(&mut tx.signature);
            }
            Tamper::Nonce => {
                let tip = tip_mut(&mut tampered)?;
                tip.nonce = tip.nonce.wrapping_add(1);
            }
            Tamper::PreviousHash => {
                let tip = tip_mut(&mut tampered)?;
                tip.previous_hash = Some(tip.previous_hash.as_deref().map(flipped).unwrap_or_default());
            }
            Tamper::NullPreviousHash => {
                tip_mut(&mut tampered)?.previous_hash.take()?;
            }
            Tamper::ReorderTransactions => {
                let tip = tip_mut(&mut tampered)?;
                let before = signatures(tip);
                tip.transactions.reverse();
                if signatures(tip) == before {
                    return None;
                }
            }
        }

        Some(tampered)
    }
}

/// Break a chain so that it no longer validates.
///
/// Corrupts the tip's recorded hash, or the genesis linkage for a chain with
/// a single block. An empty chain is returned as an (already invalid) copy.
pub fn break_chain(chain: &Chain) -> Chain {
    Tamper::BlockHash
        .apply(chain)
        .or_else(|| Tamper::GenesisPreviousHash.apply(chain))
        .unwrap_or_else(|| chain.clone())
}

/// The last block, if it is not the genesis block.
fn tip_mut(chain: &mut Chain) -> Option<&mut Block> {
    if chain.len() < 2 {
        return None;
    }
    chain.blocks.last_mut()
}

fn signatures(block: &Block) -> String {
    block.transactions.iter().map(|tx| tx.signature.as_str()).collect()
}

fn flipped(s: &str) -> String {
    let mut out = s.to_string();
    flip_first_char(&mut out);
    out
}

fn flip_first_char(s: &mut String) {
    let replacement = if s.starts_with('0') { "1" } else { "0" };
    match s.chars().next() {
        Some(c) => s.replace_range(..c.len_utf8(), replacement),
        None => s.push_str(replacement),
    }
}
