// General constants for the lending program
pub const LENDING_VERSION: &str = "0.1.0";

// Environment variables read by the off-chain configuration
pub const ENV_ADDRESS: &str = "ADDR";
pub const ENV_PRIVATE_KEY: &str = "PRIV_KEY";
pub const ENV_ENDPOINT: &str = "ENDPOINT";
pub const ENV_CHAIN_MODE: &str = "CHAIN_MODE";
pub const ENV_CONTRACT_ADDRESS: &str = "LENDING_SMARTCONTRACT_ADDR";

// Width of a method name inside the stored ABI
pub const METHOD_NAME_WIDTH: usize = 32;
