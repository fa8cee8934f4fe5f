//! # Tree Shape
//!
//! Width and height of the merkle tree over `leaf_count` leaves. Builder and
//! extractor both derive the tree layout from these two functions only.

/// Number of nodes at `height` (leaves are height 0).
///
/// Computed in 64 bits so `leaf_count` near `u32::MAX` cannot overflow.
pub fn width(leaf_count: u32, height: u32) -> u32 {
    let span = 1u64 << height;
    ((leaf_count as u64 + span - 1) >> height) as u32
}

/// Smallest height whose width is 1.
///
/// Callers must reject `leaf_count == 0` first; for zero leaves this returns 0.
pub fn tree_height(leaf_count: u32) -> u32 {
    let mut height = 0;
    while width(leaf_count, height) > 1 {
        height += 1;
    }
    height
}

/// Whether node `(height, pos)` has a right sibling at `height - 1`.
pub(crate) fn has_right_child(leaf_count: u32, height: u32, pos: u32) -> bool {
    (pos as u64) * 2 + 1 < width(leaf_count, height - 1) as u64
}
