//! ABI domain models
//!
//! Method resolution, calldata encoding and output decoding over a parsed
//! `JsonAbi`, independent of how the ABI was obtained.

mod contract;
mod value;

pub use contract::ContractAbi;
pub use value::{coerce_arg, format_value};
