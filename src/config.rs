//! Off-chain configuration for the lending contract client.
//!
//! Built once from the environment at startup and passed explicitly to
//! whatever needs it. There are no setters.

use std::fmt;
use std::str::FromStr;

use solana_program::{msg, pubkey::Pubkey};

use crate::constants::{
    ENV_ADDRESS, ENV_CHAIN_MODE, ENV_CONTRACT_ADDRESS, ENV_ENDPOINT, ENV_PRIVATE_KEY,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "devnet" | "dev" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            _ => Err(ConfigError::InvalidNetwork(value.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings handed to the RPC client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub rpc_provider: String,
    pub network: Network,
}

#[derive(Clone)]
pub struct LendingConfig {
    address: String,
    private_key: String,
    endpoint: String,
    network: Network,
    contract_address: Pubkey,
}

impl LendingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values are
    /// treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => {
                    msg!("Missing configuration value: {}", key);
                    Err(ConfigError::Missing(key))
                }
            }
        };

        let address = require(ENV_ADDRESS)?;
        let private_key = require(ENV_PRIVATE_KEY)?;
        let endpoint = require(ENV_ENDPOINT)?;
        let network = require(ENV_CHAIN_MODE)?.parse::<Network>()?;

        let raw_contract = require(ENV_CONTRACT_ADDRESS)?;
        let contract_address = Pubkey::from_str(&raw_contract).map_err(|_| {
            msg!("Contract address is not a valid public key: {}", raw_contract);
            ConfigError::InvalidContractAddress(raw_contract.clone())
        })?;

        Ok(Self {
            address,
            private_key,
            endpoint,
            network,
            contract_address,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn contract_address(&self) -> &Pubkey {
        &self.contract_address
    }

    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            rpc_provider: self.endpoint.clone(),
            network: self.network,
        }
    }
}

impl fmt::Debug for LendingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingConfig")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("network", &self.network)
            .field("contract_address", &self.contract_address)
            .finish()
    }
}
