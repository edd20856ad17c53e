pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod config;
pub mod contract;

pub mod entrypoint;
pub mod processor;
pub mod error;
pub mod constants;
pub mod instructions;

pub use crate::utils::{string_to_array, string_to_bytes, FixedString};
pub use crate::error::{LendingError, ConfigError};
#[cfg(not(target_os = "solana"))]
pub use crate::config::{LendingConfig, Network, RpcConfig};
pub use crate::contract::{AbiMethod, ContractAbi, LendingContract};
