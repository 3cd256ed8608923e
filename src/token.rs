//! ERC20-style token operations over a bound contract

use alloy::primitives::{Address, B256, U256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::error::{Error, Result};
use crate::infrastructure::ethereum::{BoundContract, EthereumProvider, TransactOpts, Wallet};

/// One whole token (18 decimals), minted when no amount is given
pub const DEFAULT_MINT_AMOUNT: u128 = 1_000_000_000_000_000_000;

/// Burned when no amount is given
pub const DEFAULT_BURN_AMOUNT: u128 = 1_500_000_000_000_000_000;

pub struct TokenService<'a> {
    provider: &'a dyn EthereumProvider,
    contract: &'a BoundContract,
}

impl<'a> TokenService<'a> {
    pub fn new(provider: &'a dyn EthereumProvider, contract: &'a BoundContract) -> Self {
        Self { provider, contract }
    }

    /// `balanceOf(account)`, as returned by the node
    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        let values = self
            .contract
            .call(self.provider, "balanceOf", &[DynSolValue::Address(account)])
            .await?;

        match values.first().and_then(DynSolValue::as_uint) {
            Some((balance, _)) => Ok(balance),
            None => Err(Error::Decode {
                method: "balanceOf".into(),
                reason: "expected a single uint output".into(),
            }),
        }
    }

    /// `mint(to, amount)`
    pub async fn mint(
        &self,
        opts: &TransactOpts,
        wallet: &Wallet,
        to: Address,
        amount: U256,
    ) -> Result<B256> {
        self.transfer_like(opts, wallet, "mint", to, amount).await
    }

    /// `burnFrom(from, amount)`; requires an allowance from `from` to the signer
    pub async fn burn_from(
        &self,
        opts: &TransactOpts,
        wallet: &Wallet,
        from: Address,
        amount: U256,
    ) -> Result<B256> {
        self.transfer_like(opts, wallet, "burnFrom", from, amount).await
    }

    async fn transfer_like(
        &self,
        opts: &TransactOpts,
        wallet: &Wallet,
        method: &str,
        account: Address,
        amount: U256,
    ) -> Result<B256> {
        let args = [
            DynSolValue::Address(account),
            DynSolValue::Uint(amount, 256),
        ];
        self.contract
            .transact(self.provider, opts, wallet, method, &args)
            .await
    }
}
