//! ABI infrastructure - reading ABI files from disk

mod loader;

pub use loader::{default_abi_path, load_abi, read_abi_file, DEFAULT_ABI_PATH};
