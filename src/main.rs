use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use bamla::app::{Command, Session};
use bamla::config::{self, FileConfig, Overrides, Settings};
use bamla::infrastructure::ethereum::Wallet;
use bamla::logging::{setup_logging, DEFAULT_LOG_LEVEL};
use bamla::token::{DEFAULT_BURN_AMOUNT, DEFAULT_MINT_AMOUNT};

#[derive(Debug, Parser)]
#[command(
    name = "bamla",
    version,
    about = "Query and mint an ERC20 token through an Ethereum JSON-RPC node"
)]
struct Args {
    /// JSON-RPC endpoint: http(s)://, ws(s):// or an IPC path [env: ETH_NODE_URL]
    #[arg(long, global = true)]
    rpc: Option<String>,

    /// Token contract address [env: BAMLA_CONTRACT]
    #[arg(long, global = true)]
    contract: Option<String>,

    /// Path to the contract ABI JSON [env: BAMLA_ABI]
    #[arg(long, global = true)]
    abi: Option<PathBuf>,

    /// Config file (default: ~/.config/bamla/config.toml) [env: BAMLA_CONFIG]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the token balance of an address (default: the configured recipient)
    Balance { address: Option<Address> },

    /// Mint tokens to an address
    Mint {
        #[arg(long)]
        to: Option<Address>,
        /// Amount in the token's smallest unit
        #[arg(long, default_value_t = U256::from(DEFAULT_MINT_AMOUNT))]
        amount: U256,
    },

    /// Burn tokens from an address via burnFrom
    Burn {
        #[arg(long)]
        from: Option<Address>,
        /// Amount in the token's smallest unit
        #[arg(long, default_value_t = U256::from(DEFAULT_BURN_AMOUNT))]
        amount: U256,
    },

    /// Print the address derived from PRIVATE_KEY
    Address,

    /// Call a read-only contract method: `call balanceOf 0xabc...`
    Call {
        method: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file = config::load(args.config.as_deref());
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| file.as_ref().ok().and_then(|c| c.log.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    setup_logging(&log_level);

    match run(args, file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, file: bamla::Result<FileConfig>) -> Result<()> {
    let file = file?;
    let overrides = Overrides {
        rpc_url: args.rpc,
        contract: args.contract,
        abi_path: args.abi,
    };

    let command = match args.command {
        Some(CliCommand::Address) => {
            let wallet = Wallet::from_env()?;
            println!("{}", wallet.address());
            return Ok(());
        }
        None => Command::Balance { account: None },
        Some(CliCommand::Balance { address }) => Command::Balance { account: address },
        Some(CliCommand::Mint { to, amount }) => Command::Mint { to, amount },
        Some(CliCommand::Burn { from, amount }) => Command::Burn { from, amount },
        Some(CliCommand::Call { method, args }) => Command::Call { method, args },
    };

    let settings = Settings::resolve(&overrides, &file)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let session = Session::open(settings).await?;
        session.execute(command, &mut io::stdout().lock()).await
    })?;
    Ok(())
}
