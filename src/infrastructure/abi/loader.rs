//! ABI file loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::abi::ContractAbi;
use crate::domain::error::{Error, Result};

/// Relative location of the token ABI, resolved against the working directory
pub const DEFAULT_ABI_PATH: &str = "ABI/bamla.json";

/// Skip anything larger than this; ABI files are small
const MAX_ABI_BYTES: u64 = 5 * 1024 * 1024;

/// Default ABI path under the current working directory
pub fn default_abi_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| Error::AbiRead {
        path: PathBuf::from(DEFAULT_ABI_PATH),
        reason: format!("failed to get current working directory: {e}"),
    })?;
    Ok(cwd.join(DEFAULT_ABI_PATH))
}

/// Read the raw ABI file content
pub fn read_abi_file(path: &Path) -> Result<String> {
    let read_err = |reason: String| Error::AbiRead {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| read_err(e.to_string()))?;
    if metadata.len() > MAX_ABI_BYTES {
        return Err(read_err(format!("file is {} bytes", metadata.len())));
    }

    fs::read_to_string(path).map_err(|e| read_err(e.to_string()))
}

/// Read and parse an ABI file
pub fn load_abi(path: &Path) -> Result<ContractAbi> {
    let content = read_abi_file(path)?;
    let abi = ContractAbi::from_json(&content)?;
    debug!(
        path = %path.display(),
        functions = abi.abi().functions().count(),
        "Loaded contract ABI"
    );
    Ok(abi)
}
