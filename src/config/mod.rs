//! Runtime settings
//!
//! Precedence: command-line flag, then environment variable, then the TOML
//! config file, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use alloy::primitives::{address, Address};
use serde::Deserialize;

use crate::domain::error::{Error, Result};
use crate::infrastructure::abi::default_abi_path;
use crate::infrastructure::ethereum::DEFAULT_GAS_LIMIT;

pub const NODE_URL_ENV_VAR: &str = "ETH_NODE_URL";
pub const CONTRACT_ENV_VAR: &str = "BAMLA_CONTRACT";
pub const RECIPIENT_ENV_VAR: &str = "BAMLA_RECIPIENT";
pub const ABI_ENV_VAR: &str = "BAMLA_ABI";
pub const CONFIG_ENV_VAR: &str = "BAMLA_CONFIG";

/// Token contract as deployed first on a fresh Anvil chain
pub const DEFAULT_CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Anvil dev account #9
pub const DEFAULT_RECIPIENT: Address = address!("a0Ee7A142d267C1f36714E4a8F75612F20a79720");

/// Contents of the optional config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub rpc_url: Option<String>,
    pub contract: Option<String>,
    pub recipient: Option<String>,
    pub abi_path: Option<PathBuf>,
    pub gas_limit: Option<u64>,
    pub log: Option<String>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub contract: Option<String>,
    pub abi_path: Option<PathBuf>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rpc_url: String,
    pub contract: Address,
    pub recipient: Address,
    pub abi_path: PathBuf,
    pub gas_limit: u64,
}

impl Settings {
    /// Resolve settings against the process environment
    pub fn resolve(overrides: &Overrides, file: &FileConfig) -> Result<Self> {
        Self::resolve_with(overrides, file, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup
    pub fn resolve_with(
        overrides: &Overrides,
        file: &FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let rpc_url = overrides
            .rpc_url
            .clone()
            .or_else(|| env(NODE_URL_ENV_VAR))
            .or_else(|| file.rpc_url.clone())
            .ok_or(Error::MissingEnv(NODE_URL_ENV_VAR))?;

        let contract = match overrides
            .contract
            .clone()
            .or_else(|| env(CONTRACT_ENV_VAR))
            .or_else(|| file.contract.clone())
        {
            Some(value) => parse_address("contract", &value)?,
            None => DEFAULT_CONTRACT,
        };

        let recipient = match env(RECIPIENT_ENV_VAR).or_else(|| file.recipient.clone()) {
            Some(value) => parse_address("recipient", &value)?,
            None => DEFAULT_RECIPIENT,
        };

        let abi_path = match overrides
            .abi_path
            .clone()
            .or_else(|| env(ABI_ENV_VAR).map(PathBuf::from))
            .or_else(|| file.abi_path.clone())
        {
            Some(path) => path,
            None => default_abi_path()?,
        };

        Ok(Self {
            rpc_url: rpc_url.trim().to_string(),
            contract,
            recipient,
            abi_path,
            gas_limit: file.gas_limit.unwrap_or(DEFAULT_GAS_LIMIT),
        })
    }
}

/// Parse a hex address, checksummed or not
pub fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    value.trim().parse().map_err(|_| Error::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

/// Load the config file
///
/// An explicit path must exist. The default location is optional: if it is
/// missing or unreadable, defaults are used.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        return parse(path, &content);
    }

    let Some(path) = config_path() else {
        return Ok(FileConfig::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => parse(&path, &content),
        Err(_) => Ok(FileConfig::default()),
    }
}

fn parse(path: &Path, content: &str) -> Result<FileConfig> {
    toml::from_str::<FileConfig>(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("bamla").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("bamla").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "bamla", "bamla")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
