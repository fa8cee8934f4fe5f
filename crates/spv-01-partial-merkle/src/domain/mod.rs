//! # Domain Module
//!
//! Core types for partial Merkle tree proofs.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
