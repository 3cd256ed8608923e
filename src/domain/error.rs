//! Error kinds for every fatal condition in a run

use std::path::PathBuf;

use thiserror::Error;

/// Which node query failed while preparing a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcQuery {
    Nonce,
    GasPrice,
    ChainId,
}

impl std::fmt::Display for RpcQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RpcQuery::Nonce => "nonce",
            RpcQuery::GasPrice => "gas price",
            RpcQuery::ChainId => "chain ID",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Invalid address for {field}: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Failed to connect to the Ethereum client: {0}")]
    Connect(String),

    #[error("Failed to load private key: {0}")]
    PrivateKey(String),

    #[error("Failed to get {query}: {reason}")]
    Rpc { query: RpcQuery, reason: String },

    #[error("Failed to read ABI file {path}: {reason}")]
    AbiRead { path: PathBuf, reason: String },

    #[error("Failed to parse contract ABI: {0}")]
    AbiParse(String),

    #[error("Method {name} with {arity} argument(s) not found in ABI")]
    UnknownMethod { name: String, arity: usize },

    #[error("Invalid argument {index} for {method}: {reason}")]
    Argument {
        method: String,
        index: usize,
        reason: String,
    },

    #[error("Failed to decode output of {method}: {reason}")]
    Decode { method: String, reason: String },

    #[error("Failed to call contract: {0}")]
    Call(String),

    #[error("Failed to create transactor: {0}")]
    Sign(String),

    #[error("Failed to send transaction: {0}")]
    Send(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
