//! Ethereum infrastructure - Alloy provider, local signing and contract binding

mod contract;
#[cfg(test)]
pub(crate) mod fake;
mod provider;
mod transactor;
mod wallet;

pub use contract::BoundContract;
pub use provider::{create_provider, AlloyProvider, EthereumProvider, ProviderConfig};
pub use transactor::{SignedTransaction, TransactOpts, DEFAULT_GAS_LIMIT};
pub use wallet::{Wallet, PRIVATE_KEY_ENV_VAR};
