use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LendingError {
    #[error("String does not fit in the requested width")]
    TooLong,

    #[error("Fixed-width field is not valid UTF-8")]
    InvalidUtf8,

    #[error("Unknown instruction")]
    UnknownInstruction,
}

impl From<LendingError> for ProgramError {
    fn from(e: LendingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// Off-chain configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid chain mode: {0}")]
    InvalidNetwork(String),

    #[error("Invalid contract address: {0}")]
    InvalidContractAddress(String),
}
