//! Inbound Ports (Driving Ports)
//!
//! The predicate deciding which block transactions are interesting.

use shared_types::BlockTransaction;

use crate::domain::{BloomFilter, TxidSetMatcher};

/// Decides whether a transaction is interesting
///
/// Matchers may learn from a match (a Bloom filter in update mode inserts the
/// matched outputs), so matching takes `&mut self` and is order-dependent.
pub trait TransactionMatcher {
    /// Test `tx`, updating internal state on a match
    fn match_and_update(&mut self, tx: &BlockTransaction) -> bool;
}

impl TransactionMatcher for BloomFilter {
    fn match_and_update(&mut self, tx: &BlockTransaction) -> bool {
        self.match_tx_and_update(tx)
    }
}

impl TransactionMatcher for TxidSetMatcher {
    fn match_and_update(&mut self, tx: &BlockTransaction) -> bool {
        self.match_tx_and_update(tx)
    }
}

impl<M: TransactionMatcher + ?Sized> TransactionMatcher for &mut M {
    fn match_and_update(&mut self, tx: &BlockTransaction) -> bool {
        (**self).match_and_update(tx)
    }
}
