//! bamla: read and mint an ERC20-style token over Ethereum JSON-RPC
//!
//! ```text
//! connect -> load key -> load ABI -> bind contract -> call | transact -> print
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod token;

pub use domain::error::{Error, Result};
