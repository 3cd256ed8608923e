//! Domain layer - ABI models and error kinds

pub mod abi;
pub mod error;

pub use error::{Error, Result, RpcQuery};
