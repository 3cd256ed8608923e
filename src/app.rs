//! One-shot session: connect, load key, bind the token, run one command

use std::io::Write;

use alloy::primitives::{Address, U256};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::domain::abi::format_value;
use crate::domain::error::Result;
use crate::infrastructure::abi::load_abi;
use crate::infrastructure::ethereum::{
    create_provider, BoundContract, EthereumProvider, ProviderConfig, TransactOpts, Wallet,
};
use crate::token::TokenService;

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the token balance of an account (recipient by default)
    Balance { account: Option<Address> },
    /// Mint `amount` to an account (recipient by default)
    Mint { to: Option<Address>, amount: U256 },
    /// Burn `amount` from an account's allowance (recipient by default)
    Burn { from: Option<Address>, amount: U256 },
    /// Call any read-only method in the ABI
    Call { method: String, args: Vec<String> },
}

pub struct Session {
    settings: Settings,
    provider: Box<dyn EthereumProvider>,
    wallet: Wallet,
    opts: TransactOpts,
    contract: BoundContract,
}

impl Session {
    /// Dial the node, load `PRIVATE_KEY` and bind the token contract
    pub async fn open(settings: Settings) -> Result<Self> {
        let config = ProviderConfig::from_url(&settings.rpc_url)?;
        let provider = create_provider(config).await?;
        info!(endpoint = %provider.endpoint_name(), "Connected to Ethereum node");

        let wallet = Wallet::from_env()?;
        info!(address = %wallet.address(), "Signer loaded");

        Self::start(settings, provider, wallet).await
    }

    /// Build the signer context from node state, then load and bind the ABI
    ///
    /// Nonce, gas price and chain ID are read for every command, reads
    /// included, so an unhealthy node fails the run before any output.
    pub async fn start(
        settings: Settings,
        provider: Box<dyn EthereumProvider>,
        wallet: Wallet,
    ) -> Result<Self> {
        let opts = TransactOpts::prepare(provider.as_ref(), &wallet, settings.gas_limit).await?;

        let abi = load_abi(&settings.abi_path)?;
        let contract = BoundContract::new(settings.contract, abi);
        debug!(contract = %contract.address(), "Token bound");

        Ok(Self {
            settings,
            provider,
            wallet,
            opts,
            contract,
        })
    }

    /// Run a command, writing its result to `out`
    pub async fn execute(&self, command: Command, out: &mut impl Write) -> Result<()> {
        let token = TokenService::new(self.provider.as_ref(), &self.contract);
        let recipient = self.settings.recipient;

        match command {
            Command::Balance { account } => {
                let account = account.unwrap_or(recipient);
                let balance = token.balance_of(account).await?;
                info!(%account, %balance, "Balance read");
                writeln!(out, "Token amount: {balance}")?;
            }
            Command::Mint { to, amount } => {
                let hash = token
                    .mint(&self.opts, &self.wallet, to.unwrap_or(recipient), amount)
                    .await?;
                writeln!(out, "Transaction sent: {hash}")?;
            }
            Command::Burn { from, amount } => {
                let hash = token
                    .burn_from(&self.opts, &self.wallet, from.unwrap_or(recipient), amount)
                    .await?;
                writeln!(out, "Transaction sent: {hash}")?;
            }
            Command::Call { method, args } => {
                let function = self.contract.abi().function(&method, args.len())?;
                if !matches!(
                    function.state_mutability,
                    alloy_json_abi::StateMutability::View | alloy_json_abi::StateMutability::Pure
                ) {
                    warn!(method = %function.signature(), "Calling a state-changing method read-only");
                }

                let values = self.contract.abi().coerce_args(&method, &args)?;
                let outputs = self
                    .contract
                    .call(self.provider.as_ref(), &method, &values)
                    .await?;
                for value in &outputs {
                    writeln!(out, "{}", format_value(value))?;
                }
            }
        }

        Ok(())
    }
}
