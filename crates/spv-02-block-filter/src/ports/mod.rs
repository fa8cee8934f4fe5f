//! Ports layer - trait definitions for the Block Filter subsystem

pub mod inbound;

pub use inbound::TransactionMatcher;
