//! Service layer - block scanning and merkle block construction

pub mod block_filterer;
pub mod merkle_block;

pub use block_filterer::{match_bitmap, matched_indices};
pub use merkle_block::{build_merkle_block, merkle_block_from_matcher};
