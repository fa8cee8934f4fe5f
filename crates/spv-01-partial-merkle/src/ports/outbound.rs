//! # Outbound Ports
//!
//! Dependencies the proof algorithms need from their environment.

use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Combines two child hashes into their parent.
///
/// Builder and extractor must use the same combiner or the two halves of the
/// protocol disagree on every internal node.
pub trait MerkleHasher: Send + Sync {
    /// Parent hash of `left` and `right`.
    fn combine(&self, left: &Hash, right: &Hash) -> Hash;
}

/// `SHA256(SHA256(left || right))`, the combiner used by block merkle trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl MerkleHasher for DoubleSha256 {
    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        let first = hasher.finalize();
        Sha256::digest(first).into()
    }
}

impl<T: MerkleHasher + ?Sized> MerkleHasher for &T {
    fn combine(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).combine(left, right)
    }
}
