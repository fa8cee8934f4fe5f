//! Block filterer
//!
//! Runs a matcher over a block in order and produces the match bitmap the
//! partial tree builder consumes.
//!
//! Block order is not guaranteed to be topological: a transaction may spend
//! one that appears later in the block. While scanning, every spent txid maps
//! to the in-block transactions seen so far that spend it. When a transaction
//! matches, its recorded spenders are re-checked (and theirs in turn), so an
//! earlier spender still matches once the matcher has learned the outputs it
//! spends.

use std::collections::HashMap;

use shared_types::{hash_to_hex, Block, Hash};
use tracing::trace;

use crate::ports::TransactionMatcher;

/// Match bitmap for `block`, one entry per transaction in block order
pub fn match_bitmap<M: TransactionMatcher + ?Sized>(block: &Block, matcher: &mut M) -> Vec<bool> {
    let mut filterer = BlockFilterer {
        block,
        spenders: HashMap::new(),
        matched: vec![false; block.transactions.len()],
    };

    for (index, tx) in block.transactions.iter().enumerate() {
        for input in &tx.inputs {
            filterer.spenders.entry(input.txid).or_default().push(index);
        }
        filterer.check(index, matcher);
    }

    filterer.matched
}

/// Indices of matched transactions, ascending
pub fn matched_indices<M: TransactionMatcher + ?Sized>(block: &Block, matcher: &mut M) -> Vec<u32> {
    match_bitmap(block, matcher)
        .iter()
        .enumerate()
        .filter(|(_, matched)| **matched)
        .map(|(index, _)| index as u32)
        .collect()
}

struct BlockFilterer<'a> {
    block: &'a Block,
    spenders: HashMap<Hash, Vec<usize>>,
    matched: Vec<bool>,
}

impl BlockFilterer<'_> {
    /// Check `index`, then every recorded spender of each transaction that
    /// matches. Spend chains can be as long as the block, so pending
    /// spenders go on a worklist instead of the call stack.
    fn check<M: TransactionMatcher + ?Sized>(&mut self, index: usize, matcher: &mut M) {
        let block = self.block;
        let mut pending = vec![index];

        while let Some(current) = pending.pop() {
            if self.matched[current] {
                continue;
            }
            let tx = &block.transactions[current];
            if !matcher.match_and_update(tx) {
                continue;
            }

            self.matched[current] = true;
            trace!(index = current, txid = %hash_to_hex(&tx.txid), "Transaction matched filter");

            // Reversed so spenders are checked in block order.
            if let Some(dependents) = self.spenders.get(&tx.txid) {
                pending.extend(dependents.iter().rev().copied());
            }
        }
    }
}
