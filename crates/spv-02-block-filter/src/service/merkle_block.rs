//! Filter-driven merkle block construction
//!
//! Glue between a matcher and the partial tree builder: run the matcher over
//! the block, then prove every matched transaction.

use shared_types::Block;
use spv_01_partial_merkle::{
    MerkleBlock, MerkleBlockApi, MerkleBlockError, MerkleBlockService, PartialMerkleConfig,
};
use tracing::debug;

use super::block_filterer::match_bitmap;
use crate::error::FilterError;
use crate::ports::TransactionMatcher;

/// Build a merkle block for `block` with the default double SHA-256 service
pub fn merkle_block_from_matcher<M: TransactionMatcher + ?Sized>(
    block: &Block,
    matcher: &mut M,
) -> Result<(MerkleBlock, Vec<u32>), FilterError> {
    let service = MerkleBlockService::new(PartialMerkleConfig::default());
    build_merkle_block(&service, block, matcher)
}

/// Build a merkle block for `block` through any proof API
///
/// Returns the block and the matched transaction indices. A block without
/// transactions cannot be proven.
pub fn build_merkle_block<A, M>(
    api: &A,
    block: &Block,
    matcher: &mut M,
) -> Result<(MerkleBlock, Vec<u32>), FilterError>
where
    A: MerkleBlockApi + ?Sized,
    M: TransactionMatcher + ?Sized,
{
    if block.transactions.is_empty() {
        return Err(MerkleBlockError::NoTransactions.into());
    }

    let bitmap = match_bitmap(block, matcher);
    let (merkle_block, matched) = api.build_from_match_bitmap(block.header, &block.txids(), &bitmap);

    debug!(
        transactions = block.transactions.len(),
        matched = matched.len(),
        "Built filtered merkle block"
    );

    Ok((merkle_block, matched))
}
