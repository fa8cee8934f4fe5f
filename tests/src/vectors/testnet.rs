//! # Testnet Merkle Blocks
//!
//! Merkle blocks served by testnet peers, checked against the block hash,
//! the header root, and the transactions each one proves.

/// Block 1268992: 12 of 76 transactions matched.
pub const TESTNET_1268992: &str =
    include_str!("../../../crates/spv-01-partial-merkle/tests/data/testnet_1268992_12_of_76.hex");

/// Block 1267123: 2 of 52 transactions matched.
pub const TESTNET_1267123: &str =
    include_str!("../../../crates/spv-01-partial-merkle/tests/data/testnet_1267123_2_of_52.hex");

/// Block 1268246: every transaction matched.
pub const TESTNET_1268246: &str =
    include_str!("../../../crates/spv-01-partial-merkle/tests/data/testnet_1268246_4_of_4.hex");

/// Decode a hex fixture into wire bytes.
pub fn fixture_bytes(fixture: &str) -> Vec<u8> {
    hex::decode(fixture.trim()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{hash_from_hex, hash_to_hex};
    use spv_01_partial_merkle::{deserialize, serialize, MerkleBlock, PartialMerkleTree};

    use crate::init_test_tracing;

    fn load(fixture: &str) -> MerkleBlock {
        deserialize(&fixture_bytes(fixture)).unwrap()
    }

    #[test]
    fn test_twelve_of_seventy_six() {
        init_test_tracing();
        let block = load(TESTNET_1268992);
        assert_eq!(
            hash_to_hex(&block.block_hash()),
            "00000000f423978ee10fdf712a9e46e9a6e83614237a94fc8569078bceb4bbf0"
        );
        assert_eq!(block.tree.leaf_count(), 76);
        assert_eq!(block.tree.hash_list().len(), 42);
        assert_eq!(block.tree.flag_bits().len(), 88);

        let result = block.extract_and_verify().unwrap();
        assert_eq!(
            hash_to_hex(&result.root),
            "a9391c2077fa2cf3a08eb76018f830e5b4f890d89b3b58200cecaaa0dd655e18"
        );
        assert_eq!(
            result.matched_positions(),
            vec![5, 9, 15, 16, 27, 29, 39, 47, 53, 57, 61, 74]
        );

        let first = hash_from_hex("107e02ad080621339f7798257337c8d25a01621a0246114eddbb38f75ec66680");
        let last = hash_from_hex("f99b9dac537a1264ffcc4c30f5227ce3583c50ae6d625dc39cd57f64020603ce");
        assert_eq!(result.matches.first().map(|m| m.hash), first.ok());
        assert_eq!(result.matches.last().map(|m| m.hash), last.ok());
    }

    #[test]
    fn test_every_fixture_verifies_and_reencodes() {
        for fixture in [TESTNET_1268992, TESTNET_1267123, TESTNET_1268246] {
            let bytes = fixture_bytes(fixture);
            let block: MerkleBlock = deserialize(&bytes).unwrap();
            assert!(block.extract_and_verify().is_ok());
            assert_eq!(serialize(&block), bytes);
        }
    }

    #[test]
    fn test_flipping_any_consumed_flag_bit_changes_outcome() {
        let block = load(TESTNET_1268992);
        let original = block.extract_and_verify().unwrap();
        let (leaves, bits, hashes) = block.tree.clone().into_parts();

        // 86 bits are consumed; the last two are byte padding.
        for i in 0..86 {
            let mut flipped = bits.clone();
            flipped[i] = !flipped[i];
            let tampered = MerkleBlock::new(
                block.header,
                PartialMerkleTree::from_parts(leaves, flipped, hashes.clone()),
            );
            assert_ne!(tampered.extract_and_verify(), Ok(original.clone()), "bit {}", i);
        }
    }

    #[test]
    fn test_flipping_padding_bits_is_harmless() {
        let block = load(TESTNET_1268992);
        let original = block.extract_and_verify().unwrap();
        let (leaves, mut bits, hashes) = block.tree.clone().into_parts();
        bits[86] = !bits[86];
        bits[87] = !bits[87];

        let padded = MerkleBlock::new(block.header, PartialMerkleTree::from_parts(leaves, bits, hashes));
        assert_eq!(padded.extract_and_verify(), Ok(original));
    }

    #[test]
    fn test_swapping_adjacent_hashes_is_rejected() {
        let block = load(TESTNET_1267123);
        let (leaves, bits, mut hashes) = block.tree.clone().into_parts();
        hashes.swap(0, 1);

        let swapped = MerkleBlock::new(block.header, PartialMerkleTree::from_parts(leaves, bits, hashes));
        assert!(swapped.extract_and_verify().is_err());
    }
}
