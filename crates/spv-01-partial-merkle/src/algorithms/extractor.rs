//! # Tree Extractor
//!
//! Replays an untrusted partial tree: recomputes the root, recovers the
//! matched leaves and rejects anything malformed.
//!
//! # Algorithm
//!
//! 1. Reject impossible sizes before any work (empty, oversized, more hashes
//!    than leaves, fewer flags than hashes).
//! 2. Walk the tree pre-order exactly as the builder did, consuming one flag
//!    per node and one hash per pruned node or leaf.
//! 3. Reject if traversal starved, found identical siblings, or left hashes
//!    or whole flag bytes unconsumed.
//!
//! Starvation does not abort the walk; a zero hash stands in so the
//! recursion unwinds normally and the first failure is reported.

use shared_types::Hash;

use super::tree_shape::{has_right_child, tree_height};
use crate::domain::{
    invariant_bits_consumed, invariant_flag_count, invariant_hash_count,
    invariant_hashes_consumed, invariant_leaf_count, MatchResult, MatchedLeaf, MerkleBlockError,
    PartialMerkleTree,
};
use crate::ports::MerkleHasher;

/// Cursor state owned by one extraction pass.
#[derive(Debug, Default)]
struct TraversalState {
    bits_used: usize,
    hashes_used: usize,
    matches: Vec<MatchedLeaf>,
    bad: Option<MerkleBlockError>,
}

impl TraversalState {
    fn mark_bad(&mut self, reason: MerkleBlockError) {
        if self.bad.is_none() {
            self.bad = Some(reason);
        }
    }
}

/// Extract the root and matched leaves from `tree`.
///
/// `max_leaf_count` bounds the work done on an unverified proof.
pub fn extract_matches<H: MerkleHasher + ?Sized>(
    hasher: &H,
    tree: &PartialMerkleTree,
    max_leaf_count: u32,
) -> Result<MatchResult, MerkleBlockError> {
    let leaf_count = tree.leaf_count();
    let flag_bits = tree.flag_bits();
    let hash_list = tree.hash_list();

    invariant_leaf_count(leaf_count, max_leaf_count)?;
    invariant_hash_count(hash_list.len(), leaf_count)?;
    invariant_flag_count(flag_bits.len(), hash_list.len())?;

    let mut state = TraversalState::default();
    let root = traverse(hasher, tree, tree_height(leaf_count), 0, &mut state);

    if let Some(reason) = state.bad {
        return Err(reason);
    }
    invariant_hashes_consumed(state.hashes_used, hash_list.len())?;
    invariant_bits_consumed(state.bits_used, flag_bits.len())?;

    Ok(MatchResult {
        root,
        matches: state.matches,
    })
}

fn traverse<H: MerkleHasher + ?Sized>(
    hasher: &H,
    tree: &PartialMerkleTree,
    height: u32,
    pos: u32,
    state: &mut TraversalState,
) -> Hash {
    let Some(&flag) = tree.flag_bits().get(state.bits_used) else {
        state.mark_bad(MerkleBlockError::BitsArrayOverflow);
        return [0u8; 32];
    };
    state.bits_used += 1;

    if height == 0 || !flag {
        let Some(&hash) = tree.hash_list().get(state.hashes_used) else {
            state.mark_bad(MerkleBlockError::HashesArrayOverflow);
            return [0u8; 32];
        };
        state.hashes_used += 1;
        if height == 0 && flag {
            state.matches.push(MatchedLeaf {
                position: pos,
                hash,
            });
        }
        return hash;
    }

    let left = traverse(hasher, tree, height - 1, pos * 2, state);
    let right = if has_right_child(tree.leaf_count(), height, pos) {
        let right = traverse(hasher, tree, height - 1, pos * 2 + 1, state);
        if right == left {
            state.mark_bad(MerkleBlockError::IdenticalHashesFound {
                height,
                position: pos,
            });
        }
        right
    } else {
        left
    };

    hasher.combine(&left, &right)
}
