//! # Application Module
//!
//! Application service orchestrating the algorithms behind the inbound port.

pub mod service;

pub use service::MerkleBlockService;
