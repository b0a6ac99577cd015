//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ledger_verify_core::{Chain, DigestAlgorithm, Transaction};

use crate::fixtures::{ChainBuilder, TestSigner};

/// Generate a deterministic signer from a random seed.
pub fn signer() -> impl Strategy<Value = TestSigner> {
    any::<[u8; 32]>().prop_map(TestSigner::from_seed)
}

/// Generate a strictly positive amount.
pub fn amount() -> impl Strategy<Value = i64> {
    1i64..=1_000_000_000
}

/// Generate an amount that must be rejected.
pub fn non_positive_amount() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), Just(i64::MIN), i64::MIN..=0]
}

/// Generate a recipient identity.
pub fn recipient() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,15}".prop_map(String::from)
}

/// Generate a digest algorithm.
pub fn digest_algorithm() -> impl Strategy<Value = DigestAlgorithm> {
    prop_oneof![Just(DigestAlgorithm::Sha256), Just(DigestAlgorithm::Blake3)]
}

/// Generate a correctly signed transaction with a positive amount.
pub fn signed_transaction() -> impl Strategy<Value = Transaction> {
    (signer(), recipient(), amount()).prop_map(|(signer, to, amount)| signer.transaction(&to, amount))
}

/// Parameters for generating a valid chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub digest: DigestAlgorithm,
    pub signers: Vec<TestSigner>,
    pub genesis_nonce: u64,
    /// Per block: nonce and (signer index, recipient, amount) per transaction.
    pub blocks: Vec<(u64, Vec<(usize, String, i64)>)>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let tx = (0usize..3, recipient(), amount());
        let block = (any::<u64>(), prop::collection::vec(tx, 0..4));
        (
            digest_algorithm(),
            prop::collection::vec(signer(), 3),
            any::<u64>(),
            prop::collection::vec(block, 0..5),
        )
            .prop_map(|(digest, signers, genesis_nonce, blocks)| ChainParams {
                digest,
                signers,
                genesis_nonce,
                blocks,
            })
            .boxed()
    }
}

/// Build the valid chain described by the parameters.
pub fn chain_from_params(params: &ChainParams) -> Chain {
    let mut builder = ChainBuilder::with_digest(params.digest).genesis(params.genesis_nonce);
    for (nonce, txs) in &params.blocks {
        let transactions = txs
            .iter()
            .map(|(who, to, amount)| params.signers[*who].transaction(to, *amount))
            .collect();
        builder = builder.block(*nonce, transactions);
    }
    builder.build()
}
