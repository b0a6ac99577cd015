//! Signing and hashing message construction.
//!
//! Messages are plain string concatenations of the relevant fields with no
//! delimiters:
//!
//! - transaction: `source || recipient || amount`
//! - block: `previous_hash || signature_0 || ... || signature_n || nonce`
//!
//! Numbers render in their canonical decimal form. A null previous hash
//! contributes the empty string.
//!
//! ## Known weakness
//!
//! Without delimiters, field boundaries are ambiguous: recipient `"bob1"`
//! with amount `5` and recipient `"bob"` with amount `15` produce the same
//! message, and so share a signature. Existing signatures and block hashes
//! were computed over this exact format, so it must not change.

use crate::types::{Block, Transaction};

/// The message a transaction's signature must cover.
pub fn transaction_message(tx: &Transaction) -> String {
    format!("{}{}{}", tx.source, tx.recipient, tx.amount)
}

/// The message whose digest a block must record as its hash.
pub fn block_message(block: &Block) -> String {
    let previous = block.previous_hash.as_deref().unwrap_or_default();
    let capacity = previous.len()
        + block.transactions.iter().map(|tx| tx.signature.len()).sum::<usize>()
        + 20;

    let mut message = String::with_capacity(capacity);
    message.push_str(previous);
    for tx in &block.transactions {
        message.push_str(&tx.signature);
    }
    message.push_str(&block.nonce.to_string());
    message
}
