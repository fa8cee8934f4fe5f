//! # Tree Builder
//!
//! Builds a partial tree from a block's full txid list and a match bitmap.
//!
//! # Algorithm
//!
//! Pre-order walk from the root `(height, 0)`:
//! 1. Push one flag: does this subtree hold a matched leaf?
//! 2. Leaf or no match: push the node hash and stop.
//! 3. Otherwise descend left, then right if the right child exists.
//!
//! An odd node with no right sibling is paired with itself.

use shared_types::Hash;

use super::tree_shape::{has_right_child, tree_height};
use crate::domain::PartialMerkleTree;
use crate::ports::MerkleHasher;

/// Hash of node `(height, pos)` over the full leaf list.
pub fn calc_hash<H: MerkleHasher + ?Sized>(
    hasher: &H,
    leaves: &[Hash],
    height: u32,
    pos: u32,
) -> Hash {
    if height == 0 {
        return leaves[pos as usize];
    }

    let left = calc_hash(hasher, leaves, height - 1, pos * 2);
    let right = if has_right_child(leaves.len() as u32, height, pos) {
        calc_hash(hasher, leaves, height - 1, pos * 2 + 1)
    } else {
        left
    };
    hasher.combine(&left, &right)
}

/// Merkle root over `leaves`, `None` for an empty list.
pub fn compute_merkle_root<H: MerkleHasher + ?Sized>(hasher: &H, leaves: &[Hash]) -> Option<Hash> {
    if leaves.is_empty() {
        return None;
    }
    let height = tree_height(leaves.len() as u32);
    Some(calc_hash(hasher, leaves, height, 0))
}

/// Build the partial tree proving every leaf whose bitmap entry is `true`.
///
/// # Panics
///
/// If `leaves` is empty, longer than `u32::MAX`, or not the same length as
/// `matches`. These inputs are produced locally, so a mismatch is a caller bug.
pub fn build_partial_tree<H: MerkleHasher + ?Sized>(
    hasher: &H,
    leaves: &[Hash],
    matches: &[bool],
) -> PartialMerkleTree {
    assert!(!leaves.is_empty(), "partial merkle tree needs at least one leaf");
    assert_eq!(
        leaves.len(),
        matches.len(),
        "leaf list and match bitmap differ in length"
    );
    assert!(leaves.len() <= u32::MAX as usize, "too many leaves");

    let leaf_count = leaves.len() as u32;
    let mut builder = Builder {
        hasher,
        leaves,
        matches,
        flag_bits: Vec::new(),
        hash_list: Vec::new(),
    };
    builder.traverse(tree_height(leaf_count), 0);

    PartialMerkleTree::from_parts(leaf_count, builder.flag_bits, builder.hash_list)
}

struct Builder<'a, H: ?Sized> {
    hasher: &'a H,
    leaves: &'a [Hash],
    matches: &'a [bool],
    flag_bits: Vec<bool>,
    hash_list: Vec<Hash>,
}

impl<H: MerkleHasher + ?Sized> Builder<'_, H> {
    fn traverse(&mut self, height: u32, pos: u32) {
        let start = (pos as usize) << height;
        let end = ((pos as usize + 1) << height).min(self.leaves.len());
        let interesting = self.matches[start..end].iter().any(|&m| m);
        self.flag_bits.push(interesting);

        if height == 0 || !interesting {
            let hash = calc_hash(self.hasher, self.leaves, height, pos);
            self.hash_list.push(hash);
            return;
        }

        self.traverse(height - 1, pos * 2);
        if has_right_child(self.leaves.len() as u32, height, pos) {
            self.traverse(height - 1, pos * 2 + 1);
        }
    }
}
