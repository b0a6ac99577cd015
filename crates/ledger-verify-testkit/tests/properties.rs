//! Property tests for the validation cascade.

use ledger_verify::{Block, Chain, Verifier, VerifierConfig};
use ledger_verify_testkit::generators::{
    amount, non_positive_amount, recipient, signed_transaction, signer, ChainParams,
};
use ledger_verify_testkit::{chain_from_params, seal_block, Tamper, TestSigner};
use proptest::prelude::*;

fn verifier_for(params: &ChainParams) -> Verifier {
    Verifier::new(VerifierConfig {
        digest: params.digest,
        ..Default::default()
    })
}

/// Replace the character at `pos % len` with a different hex digit.
fn flip_char_at(s: &mut String, pos: usize) {
    if s.is_empty() {
        s.push('0');
        return;
    }
    let pos = pos % s.len();
    let replacement = if &s[pos..pos + 1] == "0" { "1" } else { "0" };
    s.replace_range(pos..pos + 1, replacement);
}

/// A chain with at least one non-genesis block.
fn non_trivial(params: ChainParams) -> ChainParams {
    let mut params = params;
    if params.blocks.is_empty() {
        params.blocks.push((1, vec![(0, "bob".to_string(), 10)]));
    }
    params
}

proptest! {
    #[test]
    fn non_positive_amounts_are_rejected(
        signer in signer(),
        to in recipient(),
        amount in non_positive_amount(),
    ) {
        let tx = signer.transaction(&to, amount);
        prop_assert!(!Verifier::default().verify_transaction(&tx));
    }

    #[test]
    fn signed_transactions_are_accepted(tx in signed_transaction()) {
        prop_assert!(Verifier::default().verify_transaction(&tx));
    }

    #[test]
    fn tampered_recipient_is_rejected(tx in signed_transaction(), other in recipient()) {
        prop_assume!(other != tx.recipient);
        let mut tampered = tx;
        tampered.recipient = other;
        prop_assert!(!Verifier::default().verify_transaction(&tampered));
    }

    #[test]
    fn tampered_amount_is_rejected(tx in signed_transaction(), other in amount()) {
        prop_assume!(other != tx.amount);
        let mut tampered = tx;
        tampered.amount = other;
        prop_assert!(!Verifier::default().verify_transaction(&tampered));
    }

    #[test]
    fn tampered_source_is_rejected(tx in signed_transaction(), other in signer()) {
        prop_assume!(other.identity() != tx.source);
        let mut tampered = tx;
        tampered.source = other.identity();
        prop_assert!(!Verifier::default().verify_transaction(&tampered));
    }

    #[test]
    fn mutated_signature_breaks_block(
        params: ChainParams,
        tx_pick in any::<usize>(),
        pos in any::<usize>(),
    ) {
        let mut params = non_trivial(params);
        let last = params.blocks.len() - 1;
        if params.blocks[last].1.is_empty() {
            params.blocks[last].1.push((1, "carol".to_string(), 3));
        }
        let verifier = verifier_for(&params);
        let chain = chain_from_params(&params);
        let mut block = chain.tip().cloned().unwrap();
        prop_assert!(verifier.verify_block(&block));

        let index = tx_pick % block.transactions.len();
        flip_char_at(&mut block.transactions[index].signature, pos);
        prop_assert!(!verifier.verify_block(&block));
    }

    #[test]
    fn mutated_nonce_breaks_block(params: ChainParams, delta in 1u64..=u64::MAX) {
        let params = non_trivial(params);
        let verifier = verifier_for(&params);
        let mut block = chain_from_params(&params).tip().cloned().unwrap();

        block.nonce = block.nonce.wrapping_add(delta);
        prop_assert!(!verifier.verify_block(&block));
    }

    #[test]
    fn mutated_previous_hash_breaks_block(params: ChainParams, pos in any::<usize>()) {
        let params = non_trivial(params);
        let verifier = verifier_for(&params);
        let mut block = chain_from_params(&params).tip().cloned().unwrap();

        let mut previous = block.previous_hash.take().unwrap_or_default();
        flip_char_at(&mut previous, pos);
        block.previous_hash = Some(previous);
        prop_assert!(!verifier.verify_block(&block));
    }

    #[test]
    fn reordered_transactions_break_block(
        signer in signer(),
        first in amount(),
        second in amount(),
    ) {
        prop_assume!(first != second);
        let txs = vec![signer.transaction("bob", first), signer.transaction("bob", second)];
        let block = seal_block(Default::default(), Some("00".into()), 1, txs);
        let verifier = Verifier::default();
        prop_assert!(verifier.verify_block(&block));

        let mut reordered = block;
        reordered.transactions.reverse();
        prop_assert!(!verifier.verify_block(&reordered));
    }

    #[test]
    fn genesis_previous_hash_breaks_chain(params: ChainParams) {
        let verifier = verifier_for(&params);
        let chain = chain_from_params(&params);
        let tampered = Tamper::GenesisPreviousHash.apply(&chain).unwrap();
        prop_assert!(!verifier.verify_chain(&tampered));
    }

    #[test]
    fn null_previous_hash_breaks_chain_even_if_self_consistent(params: ChainParams) {
        let params = non_trivial(params);
        let verifier = verifier_for(&params);
        let mut chain = chain_from_params(&params);

        // Reseal the tip so its own hash matches its contents.
        let tip = chain.blocks.pop().unwrap();
        let orphan = seal_block(params.digest, None, tip.nonce, tip.transactions);
        prop_assert!(verifier.verify_block(&orphan));
        chain.blocks.push(orphan);

        prop_assert!(!verifier.verify_chain(&chain));
    }

    #[test]
    fn mismatched_link_breaks_chain_even_if_self_consistent(params: ChainParams, pos in any::<usize>()) {
        let params = non_trivial(params);
        let verifier = verifier_for(&params);
        let mut chain = chain_from_params(&params);

        let tip = chain.blocks.pop().unwrap();
        let mut wrong = chain.tip().map(|b| b.hash.clone()).unwrap();
        flip_char_at(&mut wrong, pos);
        let relinked = seal_block(params.digest, Some(wrong), tip.nonce, tip.transactions);
        prop_assert!(verifier.verify_block(&relinked));
        chain.blocks.push(relinked);

        prop_assert!(!verifier.verify_chain(&chain));
    }

    #[test]
    fn validators_are_idempotent(params: ChainParams, tamper_pick in 0usize..8) {
        let verifier = verifier_for(&params);
        let chain = chain_from_params(&params);
        let candidate = Tamper::ALL[tamper_pick].apply(&chain).unwrap_or(chain);

        prop_assert_eq!(verifier.verify_chain(&candidate), verifier.verify_chain(&candidate));
        for block in &candidate.blocks {
            prop_assert_eq!(verifier.verify_block(block), verifier.verify_block(block));
            for tx in &block.transactions {
                prop_assert_eq!(verifier.verify_transaction(tx), verifier.verify_transaction(tx));
            }
        }
    }

    #[test]
    fn audit_agrees_with_verify(params: ChainParams, tamper_pick in 0usize..8) {
        let verifier = verifier_for(&params);
        let chain = chain_from_params(&params);
        let candidate = Tamper::ALL[tamper_pick].apply(&chain).unwrap_or(chain);

        prop_assert_eq!(verifier.audit_chain(&candidate).is_valid(), verifier.verify_chain(&candidate));
    }
}

#[test]
fn multi_signer_block_validates() {
    let parties = ledger_verify_testkit::multi_party_signers(4);
    let txs = parties
        .iter()
        .enumerate()
        .map(|(i, p)| p.transaction("pool", i as i64 + 1))
        .collect();
    let genesis = seal_block(Default::default(), None, 0, vec![]);
    let block = seal_block(Default::default(), Some(genesis.hash.clone()), 1, txs);
    let chain = Chain::new(vec![genesis, block]);

    assert!(Verifier::default().verify_chain(&chain));
}

#[test]
fn block_with_foreign_signature_is_rejected() {
    let alice = TestSigner::from_seed([0x01; 32]);
    let mallory = TestSigner::from_seed([0x02; 32]);

    // Mallory signs a transaction claiming to come from alice.
    let mut forged = alice.transaction("mallory", 100);
    forged.signature = mallory.sign(&ledger_verify::core::transaction_message(&forged));
    let block: Block = seal_block(Default::default(), Some("00".into()), 1, vec![forged]);

    assert!(!Verifier::default().verify_block(&block));
}
