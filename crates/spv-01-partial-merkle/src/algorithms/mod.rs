//! # Algorithms Module
//!
//! Tree shape math, flag packing, and the builder/extractor pair.

pub mod bit_packer;
pub mod builder;
pub mod extractor;
pub mod tree_shape;

pub use bit_packer::{pack_bits, unpack_bits};
pub use builder::{build_partial_tree, calc_hash, compute_merkle_root};
pub use extractor::extract_matches;
pub use tree_shape::{tree_height, width};
