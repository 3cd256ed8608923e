//! Local key wallet
//!
//! The private key is read from the environment only and is never logged,
//! printed or serialized.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::domain::error::{Error, Result};

/// Environment variable holding the hex-encoded private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// A secp256k1 signing key and its derived address
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key (with or without 0x)
    pub fn from_private_key(private_key_hex: &str) -> Result<Self> {
        let trimmed = private_key_hex.trim();
        let key_hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Error::PrivateKey(format!("invalid private key format: {e}")))?;

        Ok(Self { signer })
    }

    /// Load the wallet from `PRIVATE_KEY`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(PRIVATE_KEY_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(Error::MissingEnv(PRIVATE_KEY_ENV_VAR))?;
        Self::from_private_key(&key)
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Network wallet used to sign transaction envelopes
    pub fn network_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
