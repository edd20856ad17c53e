use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

#[cfg(not(target_os = "solana"))]
use crate::config::LendingConfig;
use crate::constants::METHOD_NAME_WIDTH;
use crate::error::LendingError;
use crate::utils::FixedString;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct AbiMethod {
    pub name: FixedString<METHOD_NAME_WIDTH>,
}

impl AbiMethod {
    pub const SIZE: usize = METHOD_NAME_WIDTH;

    pub fn new(name: &str) -> Result<Self, LendingError> {
        Ok(Self {
            name: FixedString::new(name)?,
        })
    }
}

/// Methods exposed by a contract, addressed by their position.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractAbi {
    methods: Vec<AbiMethod>,
}

impl ContractAbi {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_methods(methods: Vec<AbiMethod>) -> Self {
        Self { methods }
    }

    pub fn method(&self, index: u8) -> Option<&AbiMethod> {
        self.methods.get(index as usize)
    }

    pub fn find(&self, name: &str) -> Option<&AbiMethod> {
        self.methods
            .iter()
            .find(|method| method.name.as_str().map_or(false, |n| n == name))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Handle on the deployed lending contract.
///
/// The lending ABI declares no methods yet, so the handle carries an
/// empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendingContract {
    program_id: Pubkey,
    abi: ContractAbi,
}

impl LendingContract {
    #[cfg(not(target_os = "solana"))]
    pub fn new(config: &LendingConfig) -> Self {
        Self::with_program_id(*config.contract_address())
    }

    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self {
            program_id,
            abi: ContractAbi::empty(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lending_contract_has_no_methods() {
        let program_id = Pubkey::new_unique();
        let contract = LendingContract::with_program_id(program_id);
        assert_eq!(*contract.program_id(), program_id);
        assert!(contract.abi().is_empty());
        assert_eq!(contract.abi().method(0), None);
        assert_eq!(contract.abi().find("borrow"), None);
    }

    #[test]
    fn contract_uses_configured_address() {
        let config = LendingConfig::from_lookup(|key| {
            Some(match key {
                "CHAIN_MODE" => "devnet".to_string(),
                "LENDING_SMARTCONTRACT_ADDR" => {
                    "11111111111111111111111111111111".to_string()
                }
                _ => "value".to_string(),
            })
        })
        .unwrap();
        let contract = LendingContract::new(&config);
        assert_eq!(*contract.program_id(), Pubkey::default());
    }

    #[test]
    fn abi_lookup_by_index_and_name() {
        let abi = ContractAbi::from_methods(vec![
            AbiMethod::new("deposit").unwrap(),
            AbiMethod::new("withdraw").unwrap(),
        ]);
        assert_eq!(abi.len(), 2);
        assert_eq!(abi.method(1), abi.find("withdraw"));
        assert_eq!(abi.method(2), None);
        assert_eq!(abi.find("depo"), None);
    }

    #[test]
    fn method_name_must_fit() {
        let long_name = "m".repeat(METHOD_NAME_WIDTH + 1);
        assert_eq!(AbiMethod::new(&long_name), Err(LendingError::TooLong));
    }

    #[test]
    fn abi_borsh_layout() {
        let abi = ContractAbi::from_methods(vec![AbiMethod::new("repay").unwrap()]);
        let data = abi.try_to_vec().unwrap();
        // u32 length prefix followed by one fixed-width name
        assert_eq!(data.len(), 4 + AbiMethod::SIZE);
        assert_eq!(ContractAbi::try_from_slice(&data).unwrap(), abi);

        let empty = ContractAbi::empty().try_to_vec().unwrap();
        assert_eq!(empty, vec![0, 0, 0, 0]);
    }
}
