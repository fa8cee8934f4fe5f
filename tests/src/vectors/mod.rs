//! Recorded testnet merkle blocks.

pub mod testnet;
