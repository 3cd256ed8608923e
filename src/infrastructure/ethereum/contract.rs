//! Contract binding - an ABI attached to an address on a provider

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256};
use alloy::rpc::types::TransactionRequest;
use alloy_dyn_abi::DynSolValue;
use tracing::{debug, info, warn};

use super::provider::EthereumProvider;
use super::transactor::TransactOpts;
use super::wallet::Wallet;
use crate::domain::abi::ContractAbi;
use crate::domain::error::{Error, Result};

/// A deployed contract bound to its ABI
#[derive(Debug, Clone)]
pub struct BoundContract {
    address: Address,
    abi: ContractAbi,
}

impl BoundContract {
    pub fn new(address: Address, abi: ContractAbi) -> Self {
        Self { address, abi }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }

    /// Invoke a read-only method via `eth_call` and decode its outputs
    pub async fn call(
        &self,
        provider: &dyn EthereumProvider,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>> {
        let input = self.abi.encode_input(method, args)?;
        let request = TransactionRequest::default()
            .with_to(self.address)
            .with_input(Bytes::from(input));

        debug!(contract = %self.address, method, "eth_call");
        let output = provider
            .call(request)
            .await
            .map_err(|e| Error::Call(format!("{e:#}")))?;

        self.abi.decode_output(method, args.len(), &output)
    }

    /// Sign and submit a state-changing method call
    ///
    /// Returns the transaction hash once the node has accepted it; the receipt
    /// is not awaited.
    pub async fn transact(
        &self,
        provider: &dyn EthereumProvider,
        opts: &TransactOpts,
        wallet: &Wallet,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<B256> {
        let input = self.abi.encode_input(method, args)?;
        let signed = opts.sign(wallet, self.address, Bytes::from(input)).await?;
        debug!(contract = %self.address, method, tx = %signed.hash, "Signed transaction");

        let hash = provider
            .send_raw_transaction(&signed.raw)
            .await
            .map_err(|e| Error::Send(format!("{e:#}")))?;
        if hash != signed.hash {
            warn!(expected = %signed.hash, returned = %hash, "Node returned a different transaction hash");
        }

        info!(
            contract = %self.address,
            method,
            nonce = opts.nonce,
            tx = %hash,
            "Transaction submitted"
        );
        Ok(hash)
    }
}
