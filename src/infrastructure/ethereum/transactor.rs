//! Transaction signing context
//!
//! Collects nonce, gas price and chain ID from the node up front, then signs
//! legacy (EIP-155) transactions locally. Nothing is estimated or retried.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::TransactionRequest;
use tracing::debug;

use super::provider::EthereumProvider;
use super::wallet::Wallet;
use crate::domain::error::{Error, Result, RpcQuery};

/// Gas limit applied to every transaction, in units
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

/// Fields applied to an outgoing transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactOpts {
    pub from: Address,
    pub nonce: u64,
    /// Value in wei
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub chain_id: u64,
}

/// A signed transaction ready for `eth_sendRawTransaction`
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub raw: Vec<u8>,
    pub hash: B256,
}

impl TransactOpts {
    /// Query the node for the pending nonce, gas price and chain ID
    pub async fn prepare(
        provider: &dyn EthereumProvider,
        wallet: &Wallet,
        gas_limit: u64,
    ) -> Result<Self> {
        let from = wallet.address();
        let rpc_err = |query: RpcQuery| move |e: anyhow::Error| Error::Rpc {
            query,
            reason: format!("{e:#}"),
        };

        let nonce = provider
            .pending_nonce(from)
            .await
            .map_err(rpc_err(RpcQuery::Nonce))?;
        let gas_price = provider
            .gas_price()
            .await
            .map_err(rpc_err(RpcQuery::GasPrice))?;
        let chain_id = provider
            .chain_id()
            .await
            .map_err(rpc_err(RpcQuery::ChainId))?;

        debug!(%from, nonce, %gas_price, chain_id, gas_limit, "Transactor prepared");

        Ok(Self {
            from,
            nonce,
            value: U256::ZERO,
            gas_limit,
            gas_price,
            chain_id,
        })
    }

    /// Build the unsigned request for a call to `to` carrying `input`
    pub fn request(&self, to: Address, input: Bytes) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(to)
            .with_input(input)
            .with_value(self.value)
            .with_nonce(self.nonce)
            .with_gas_limit(self.gas_limit)
            .with_gas_price(self.gas_price)
            .with_chain_id(self.chain_id)
    }

    /// Sign a transaction to `to` with the wallet's key
    pub async fn sign(&self, wallet: &Wallet, to: Address, input: Bytes) -> Result<SignedTransaction> {
        if wallet.address() != self.from {
            return Err(Error::Sign(format!(
                "wallet {} does not match sender {}",
                wallet.address(),
                self.from
            )));
        }

        let envelope = self
            .request(to, input)
            .build(&wallet.network_wallet())
            .await
            .map_err(|e| Error::Sign(e.to_string()))?;

        Ok(SignedTransaction {
            hash: *envelope.tx_hash(),
            raw: envelope.encoded_2718(),
        })
    }
}
