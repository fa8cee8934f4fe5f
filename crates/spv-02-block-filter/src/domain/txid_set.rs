//! Exact transaction-id matching
//!
//! The deterministic alternative to a Bloom filter: a transaction matches
//! when its id is in the set. With `follow_spends`, a transaction spending a
//! matched one also matches and joins the set, so whole in-block chains are
//! proven.

use std::collections::HashSet;

use shared_types::{BlockTransaction, Hash};

/// Explicit set of interesting transaction ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxidSetMatcher {
    txids: HashSet<Hash>,
    follow_spends: bool,
}

impl TxidSetMatcher {
    /// Match exactly the given ids
    pub fn new(txids: impl IntoIterator<Item = Hash>) -> Self {
        Self {
            txids: txids.into_iter().collect(),
            follow_spends: false,
        }
    }

    /// Also match (and learn) transactions spending a matched one
    pub fn following_spends(mut self) -> Self {
        self.follow_spends = true;
        self
    }

    /// Ids currently in the set
    pub fn txids(&self) -> &HashSet<Hash> {
        &self.txids
    }

    /// Match a transaction, learning its id when following spends
    pub fn match_tx_and_update(&mut self, tx: &BlockTransaction) -> bool {
        if self.txids.contains(&tx.txid) {
            return true;
        }
        if !self.follow_spends {
            return false;
        }
        let spends_match = tx.inputs.iter().any(|input| self.txids.contains(&input.txid));
        if spends_match {
            self.txids.insert(tx.txid);
        }
        spends_match
    }
}
