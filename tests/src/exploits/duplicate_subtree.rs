//! # Duplicate Subtree Malleation (CVE-2012-2459)
//!
//! An odd node at any level is hashed with itself. Appending a copy of the
//! trailing transactions therefore yields a different transaction list with
//! the same merkle root. A proof that descends into both copies must be
//! rejected, or a light client could be shown a transaction twice, at a
//! position that does not exist in the real block.

#[cfg(test)]
mod tests {
    use shared_types::Hash;
    use spv_01_partial_merkle::{
        build_partial_tree, compute_merkle_root, deserialize, serialize, DoubleSha256,
        MerkleBlock, MerkleBlockError,
    };

    use crate::{header_for, init_test_tracing, txid};

    fn honest_txids() -> Vec<Hash> {
        (1..=10).map(txid).collect()
    }

    /// [1..10, 9, 10]
    fn malleated_txids() -> Vec<Hash> {
        let mut txids = honest_txids();
        txids.push(txid(9));
        txids.push(txid(10));
        txids
    }

    fn bitmap(len: usize, matched: &[usize]) -> Vec<bool> {
        (0..len).map(|i| matched.contains(&i)).collect()
    }

    #[test]
    fn test_duplicated_tail_has_same_root() {
        let honest = compute_merkle_root(&DoubleSha256, &honest_txids());
        let malleated = compute_merkle_root(&DoubleSha256, &malleated_txids());
        assert!(honest.is_some());
        assert_eq!(honest, malleated);
    }

    #[test]
    fn test_proof_into_duplicated_tail_is_rejected() {
        init_test_tracing();
        let txids = malleated_txids();
        let header = header_for(&honest_txids());

        let tree = build_partial_tree(&DoubleSha256, &txids, &bitmap(txids.len(), &[10, 11]));
        let forged: MerkleBlock = deserialize(&serialize(&MerkleBlock::new(header, tree))).unwrap();

        let err = forged.extract_and_verify().unwrap_err();
        assert!(matches!(err, MerkleBlockError::IdenticalHashesFound { .. }));
        assert!(err.is_invalid_tree());
    }

    #[test]
    fn test_proof_spanning_both_copies_is_rejected() {
        let txids = malleated_txids();
        let header = header_for(&honest_txids());

        // Original leaf 9 and its duplicate at 11.
        let tree = build_partial_tree(&DoubleSha256, &txids, &bitmap(txids.len(), &[9, 11]));
        let err = MerkleBlock::new(header, tree).extract_and_verify().unwrap_err();
        assert!(matches!(err, MerkleBlockError::IdenticalHashesFound { .. }));
    }

    #[test]
    fn test_honest_proof_of_same_transactions_verifies() {
        let txids = honest_txids();
        let header = header_for(&txids);

        let tree = build_partial_tree(&DoubleSha256, &txids, &bitmap(txids.len(), &[8, 9]));
        let result = MerkleBlock::new(header, tree).extract_and_verify().unwrap();
        assert_eq!(result.matched_positions(), vec![8, 9]);
        assert_eq!(result.matched_hashes(), vec![txid(9), txid(10)]);
    }

    #[test]
    fn test_proof_not_touching_duplicates_still_verifies() {
        // Only the untouched prefix is revealed; the duplicated subtree is
        // summarised by a single hash and never compared with its twin.
        let txids = malleated_txids();
        let header = header_for(&honest_txids());

        let tree = build_partial_tree(&DoubleSha256, &txids, &bitmap(txids.len(), &[2]));
        let result = MerkleBlock::new(header, tree).extract_and_verify().unwrap();
        assert_eq!(result.matched_positions(), vec![2]);
    }
}
