//! # Exploit Simulations
//!
//! Each module reproduces a known way to forge or abuse a merkle-block
//! proof and asserts it is rejected.

pub mod duplicate_subtree;
