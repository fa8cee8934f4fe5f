//! # Integration Test Flows
//!
//! Full-node side and light-client side of a filtered block exchange:
//!
//! 1. **Filter (spv-02)**: the full node runs the peer's filter over a block
//! 2. **Build (spv-01)**: matched transactions become a partial merkle tree
//! 3. **Wire (spv-01 codec)**: the merkle block is serialized and parsed back
//! 4. **Verify (spv-01)**: the light client replays the tree against the header

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use shared_types::{Block, BlockTransaction, Hash, OutPoint};
    use spv_01_partial_merkle::{
        deserialize, serialize, MerkleBlock, MerkleBlockApi, MerkleBlockError,
        MerkleBlockService, PartialMerkleConfig,
    };
    use spv_02_block_filter::{
        build_merkle_block, merkle_block_from_matcher, BloomConfigBuilder, BloomFilter, BloomUpdate,
        TxidSetMatcher,
    };

    use crate::{header_for, init_test_tracing, paying_tx, txid};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const WALLET_KEY_HASH: &[u8] = &[0xC0; 20];

    // Pay-to-witness-key-hash locking WALLET_KEY_HASH
    const WALLET_SCRIPT: &[u8] = &[
        0x00, 0x14, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
        0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    ];

    /// Block of `size` transactions; `wallet_at` pay the wallet script and
    /// `spender_at` spends the first wallet output.
    fn wallet_block(size: u32, wallet_at: &[u32], spender_at: u32) -> Block {
        let first_wallet = txid(wallet_at[0]);
        let transactions: Vec<BlockTransaction> = (0..size)
            .map(|i| {
                if wallet_at.contains(&i) {
                    paying_tx(txid(i), WALLET_SCRIPT)
                } else if i == spender_at {
                    BlockTransaction::new(txid(i), vec![OutPoint::new(first_wallet, 0)], vec![])
                } else {
                    paying_tx(txid(i), &[0x51, i as u8])
                }
            })
            .collect();
        let txids: Vec<Hash> = transactions.iter().map(|tx| tx.txid).collect();
        Block { header: header_for(&txids), transactions }
    }

    fn over_the_wire(block: &MerkleBlock) -> MerkleBlock {
        deserialize(&serialize(block)).unwrap()
    }

    // =========================================================================
    // FULL NODE -> LIGHT CLIENT
    // =========================================================================

    #[test]
    fn test_bloom_filter_to_verified_merkle_block() {
        init_test_tracing();
        let block = wallet_block(23, &[3, 17], 20);

        let mut filter = BloomConfigBuilder::new()
            .target_fpr(0.000_01)
            .expected_elements(10)
            .tweak(0xDEAD_BEEF)
            .update(BloomUpdate::All)
            .build()
            .and_then(|config| BloomFilter::from_config(&config))
            .unwrap();
        filter.insert(WALLET_KEY_HASH);

        let (merkle_block, matched) = merkle_block_from_matcher(&block, &mut filter).unwrap();
        assert_eq!(matched, vec![3, 17, 20]);

        let received = over_the_wire(&merkle_block);
        assert_eq!(received.block_hash(), block.header.block_hash());

        let result = received.extract_and_verify().unwrap();
        assert_eq!(result.root, block.header.merkle_root);
        assert_eq!(result.matched_positions(), vec![3, 17, 20]);
        assert_eq!(result.matched_hashes(), vec![txid(3), txid(17), txid(20)]);
    }

    #[test]
    fn test_spender_ahead_of_funding_is_proven() {
        init_test_tracing();
        // Spender at index 2 appears before the wallet payment at index 6.
        let block = wallet_block(8, &[6], 2);

        let mut filter = BloomFilter::new(4, 0.000_01, 7, BloomUpdate::All);
        filter.insert(WALLET_KEY_HASH);

        let (merkle_block, _) = merkle_block_from_matcher(&block, &mut filter).unwrap();
        let result = over_the_wire(&merkle_block).extract_and_verify().unwrap();
        assert_eq!(result.matched_positions(), vec![2, 6]);
    }

    #[test]
    fn test_txid_set_through_custom_service() {
        init_test_tracing();
        let block = wallet_block(40, &[0], 39);
        let service = MerkleBlockService::new(PartialMerkleConfig::for_testing());
        let mut matcher = TxidSetMatcher::new([txid(11), txid(39)]);

        let (merkle_block, matched) = build_merkle_block(&service, &block, &mut matcher).unwrap();
        assert_eq!(matched, vec![11, 39]);

        let result = service.verify_merkle_block(&over_the_wire(&merkle_block)).unwrap();
        assert_eq!(result.matched_hashes(), vec![txid(11), txid(39)]);
    }

    #[test]
    fn test_explicit_set_matches_bitmap_builder() {
        let block = wallet_block(13, &[1], 12);
        let txids = block.txids();
        let service = MerkleBlockService::new(PartialMerkleConfig::default());

        let wanted: HashSet<Hash> = [txid(4), txid(9), [0xEE; 32]].into_iter().collect();
        let (from_set, set_positions) =
            service.build_from_explicit_set(block.header, &txids, &wanted);

        let bitmap: Vec<bool> = (0..13).map(|i| i == 4 || i == 9).collect();
        let (from_bitmap, bitmap_positions) =
            service.build_from_match_bitmap(block.header, &txids, &bitmap);

        assert_eq!(set_positions, vec![4, 9]);
        assert_eq!(set_positions, bitmap_positions);
        assert_eq!(serialize(&from_set), serialize(&from_bitmap));
    }

    #[test]
    fn test_nothing_matched_still_proves_root() {
        let block = wallet_block(9, &[2], 5);
        let mut matcher = TxidSetMatcher::new([[0xEE; 32]]);

        let (merkle_block, matched) = merkle_block_from_matcher(&block, &mut matcher).unwrap();
        assert!(matched.is_empty());
        assert_eq!(merkle_block.tree.hash_list().len(), 1);

        let result = over_the_wire(&merkle_block).extract_and_verify().unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.root, block.header.merkle_root);
    }

    #[test]
    fn test_proof_against_wrong_header_is_rejected() {
        let block = wallet_block(6, &[1], 4);
        let other = wallet_block(7, &[1], 4);
        let mut matcher = TxidSetMatcher::new([txid(1)]);

        let (mut merkle_block, _) = merkle_block_from_matcher(&block, &mut matcher).unwrap();
        merkle_block.header = other.header;

        let err = over_the_wire(&merkle_block).extract_and_verify().unwrap_err();
        assert!(matches!(err, MerkleBlockError::MerkleRootMismatch { .. }));
        assert!(!err.is_invalid_tree());
    }

    #[test]
    fn test_single_transaction_block() {
        let block = wallet_block(1, &[0], 99);
        let mut filter = BloomFilter::new(1, 0.001, 0, BloomUpdate::None);
        filter.insert(WALLET_KEY_HASH);

        let (merkle_block, matched) = merkle_block_from_matcher(&block, &mut filter).unwrap();
        assert_eq!(matched, vec![0]);
        // The root of a one-transaction block is the txid itself.
        assert_eq!(block.header.merkle_root, txid(0));

        let result = over_the_wire(&merkle_block).extract_and_verify().unwrap();
        assert_eq!(result.matched_hashes(), vec![txid(0)]);
    }

    // =========================================================================
    // RANDOMISED BLOCKS
    // =========================================================================

    proptest! {
        #[test]
        fn prop_any_selection_survives_the_wire(
            size in 1u32..300,
            picks in proptest::collection::vec(0u32..300, 0..20),
        ) {
            let block = wallet_block(size, &[0], size);
            let wanted: Vec<u32> = picks.into_iter().filter(|p| *p < size).collect();
            let mut matcher = TxidSetMatcher::new(wanted.iter().map(|p| txid(*p)));

            let (merkle_block, matched) = merkle_block_from_matcher(&block, &mut matcher).unwrap();
            let result = over_the_wire(&merkle_block).extract_and_verify().unwrap();

            let mut expected = wanted;
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(&matched, &expected);
            prop_assert_eq!(result.matched_positions(), expected);
            prop_assert_eq!(result.root, block.header.merkle_root);
        }
    }
}
