//! # Shared Types Crate
//!
//! Chain entities shared by the SPV proof crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the header and transaction shapes used by
//!   `spv-01-partial-merkle` and `spv-02-block-filter` are defined here.
//! - **Internal byte order**: a [`Hash`] is stored exactly as it travels on
//!   the wire. Human-readable hex is the reversed form, see
//!   [`hash_to_hex`] and [`hash_from_hex`].

pub mod entities;
pub mod errors;
pub mod hashing;

pub use entities::*;
pub use errors::*;
pub use hashing::*;
