//! Domain layer for the Block Filter subsystem
//!
//! Pure matching logic, no I/O.

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod script;
pub mod txid_set;

pub use bloom_filter::{BloomFilter, BloomUpdate};
pub use config::{BloomConfig, BloomConfigBuilder, MAX_EXPECTED_ELEMENTS};
pub use parameters::{calculate_optimal_parameters, BloomFilterParams, MAX_FILTER_SIZE, MAX_HASH_FUNCS};
pub use script::{data_pushes, DataPushes};
pub use txid_set::TxidSetMatcher;
