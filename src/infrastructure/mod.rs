//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Alloy-based Ethereum provider, wallet and transaction signing
//! - ABI file loading

pub mod abi;
pub mod ethereum;
