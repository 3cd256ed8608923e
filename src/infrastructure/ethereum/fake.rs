//! In-memory provider for unit tests

use std::sync::Mutex;

use alloy::primitives::{keccak256, Address, Bytes, B256};
use alloy::rpc::types::TransactionRequest;
use anyhow::{bail, Result};

use super::provider::EthereumProvider;

pub struct FakeProvider {
    chain_id: u64,
    nonce: u64,
    gas_price: u128,
    call_result: Bytes,
    failing: Option<&'static str>,
    pub calls: Mutex<Vec<TransactionRequest>>,
    pub sent: Mutex<Vec<Vec<u8>>>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            chain_id: 31337,
            nonce: 0,
            gas_price: 1_000_000_000,
            call_result: Bytes::new(),
            failing: None,
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_call_result(mut self, data: impl Into<Bytes>) -> Self {
        self.call_result = data.into();
        self
    }

    /// Make the named RPC method fail
    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing = Some(method);
        self
    }

    fn check(&self, method: &str) -> Result<()> {
        if self.failing == Some(method) {
            bail!("{method} unavailable");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EthereumProvider for FakeProvider {
    async fn chain_id(&self) -> Result<u64> {
        self.check("eth_chainId")?;
        Ok(self.chain_id)
    }

    async fn pending_nonce(&self, _address: Address) -> Result<u64> {
        self.check("eth_getTransactionCount")?;
        Ok(self.nonce)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.check("eth_gasPrice")?;
        Ok(self.gas_price)
    }

    async fn call(&self, request: TransactionRequest) -> Result<Bytes> {
        self.check("eth_call")?;
        self.calls.lock().unwrap().push(request);
        Ok(self.call_result.clone())
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<B256> {
        self.check("eth_sendRawTransaction")?;
        self.sent.lock().unwrap().push(raw.to_vec());
        Ok(keccak256(raw))
    }

    fn endpoint_name(&self) -> String {
        "fake".to_string()
    }
}
