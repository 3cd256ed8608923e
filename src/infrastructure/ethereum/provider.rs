//! Ethereum provider abstraction and Alloy implementation
//!
//! Providers are built without the recommended fillers: nonce, gas price and
//! chain ID are fetched explicitly by the transactor so every node query is
//! visible and fails on its own.

use std::path::PathBuf;

use alloy::primitives::{Address, Bytes, B256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::TransactionRequest;
use anyhow::Result;
use tracing::debug;

use crate::domain::error::Error;

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// HTTP JSON-RPC endpoint
    Http(String),
    /// WebSocket endpoint
    WebSocket(String),
    /// IPC socket path (Unix only)
    #[cfg(unix)]
    Ipc(PathBuf),
}

impl ProviderConfig {
    /// Pick the transport from the endpoint's scheme
    ///
    /// Anything that is not http(s) or ws(s) is treated as an IPC socket path.
    pub fn from_url(url: &str) -> crate::Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::Connect("empty endpoint".into()));
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ProviderConfig::Http(url.to_string()));
        }
        if lower.starts_with("ws://") || lower.starts_with("wss://") {
            return Ok(ProviderConfig::WebSocket(url.to_string()));
        }

        Self::ipc(url)
    }

    #[cfg(unix)]
    fn ipc(path: &str) -> crate::Result<Self> {
        Ok(ProviderConfig::Ipc(PathBuf::from(path)))
    }

    #[cfg(not(unix))]
    fn ipc(path: &str) -> crate::Result<Self> {
        Err(Error::Connect(format!("unsupported endpoint: {path}")))
    }

    /// Get display name for this endpoint
    pub fn display(&self) -> String {
        match self {
            ProviderConfig::Http(url) => url.clone(),
            ProviderConfig::WebSocket(url) => url.clone(),
            #[cfg(unix)]
            ProviderConfig::Ipc(path) => path.display().to_string(),
        }
    }
}

/// Node operations used by the token commands
#[async_trait::async_trait]
pub trait EthereumProvider: Send + Sync + 'static {
    /// Chain ID used for EIP-155 signing
    async fn chain_id(&self) -> Result<u64>;

    /// Next nonce for an account, counting pending transactions
    async fn pending_nonce(&self, address: Address) -> Result<u64>;

    /// Suggested legacy gas price in wei
    async fn gas_price(&self) -> Result<u128>;

    /// Execute a call (eth_call)
    async fn call(&self, request: TransactionRequest) -> Result<Bytes>;

    /// Submit a signed, EIP-2718 encoded transaction
    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<B256>;

    /// Get endpoint display name
    fn endpoint_name(&self) -> String;
}

/// Alloy-backed provider over any supported transport
pub struct AlloyProvider {
    provider: RootProvider,
    endpoint: String,
}

/// Create a provider from configuration
pub async fn create_provider(config: ProviderConfig) -> crate::Result<Box<dyn EthereumProvider>> {
    let endpoint = config.display();
    let provider = match config {
        ProviderConfig::Http(url) => {
            let rpc_url = url
                .parse()
                .map_err(|e| Error::Connect(format!("invalid HTTP URL '{url}': {e}")))?;
            ProviderBuilder::new()
                .disable_recommended_fillers()
                .connect_http(rpc_url)
        }
        ProviderConfig::WebSocket(url) => ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect(&url)
            .await
            .map_err(|e| Error::Connect(e.to_string()))?,
        #[cfg(unix)]
        ProviderConfig::Ipc(path) => {
            use alloy::providers::IpcConnect;
            let ipc = IpcConnect::new(path.to_string_lossy().to_string());
            ProviderBuilder::new()
                .disable_recommended_fillers()
                .connect_ipc(ipc)
                .await
                .map_err(|e| Error::Connect(e.to_string()))?
        }
    };

    debug!(endpoint = %endpoint, "Provider created");
    Ok(Box::new(AlloyProvider { provider, endpoint }))
}

#[async_trait::async_trait]
impl EthereumProvider for AlloyProvider {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        Ok(self.provider.get_transaction_count(address).pending().await?)
    }

    async fn gas_price(&self) -> Result<u128> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn call(&self, request: TransactionRequest) -> Result<Bytes> {
        Ok(self.provider.call(request).await?)
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<B256> {
        let pending = self.provider.send_raw_transaction(raw).await?;
        Ok(*pending.tx_hash())
    }

    fn endpoint_name(&self) -> String {
        self.endpoint.clone()
    }
}
