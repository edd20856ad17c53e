use solana_program::{
    program_error::ProgramError,
    msg,
};

use crate::contract::{AbiMethod, ContractAbi};
use crate::error::LendingError;

/// A decoded call: the ABI method and its raw payload.
#[derive(Debug, PartialEq, Eq)]
pub struct LendingInstruction<'a, 'd> {
    pub method: &'a AbiMethod,
    pub payload: &'d [u8],
}

// Layout: one byte of method index into the ABI, then the method payload.
pub fn decode_instruction<'a, 'd>(
    abi: &'a ContractAbi,
    instruction_data: &'d [u8],
) -> Result<LendingInstruction<'a, 'd>, ProgramError> {
    let (&index, payload) = instruction_data.split_first().ok_or_else(|| {
        msg!("Error: Empty instruction data");
        ProgramError::InvalidInstructionData
    })?;

    let method = abi.method(index).ok_or_else(|| {
        msg!("Error: No method at index {} ({} declared)", index, abi.len());
        LendingError::UnknownInstruction
    })?;

    Ok(LendingInstruction { method, payload })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_is_invalid() {
        let abi = ContractAbi::empty();
        assert_eq!(
            decode_instruction(&abi, &[]),
            Err(ProgramError::InvalidInstructionData)
        );
    }

    #[test]
    fn empty_abi_rejects_every_index() {
        let abi = ContractAbi::empty();
        for index in [0u8, 1, 255] {
            assert_eq!(
                decode_instruction(&abi, &[index, 7, 7]),
                Err(LendingError::UnknownInstruction.into())
            );
        }
    }

    #[test]
    fn splits_method_and_payload() {
        let abi = ContractAbi::from_methods(vec![
            AbiMethod::new("deposit").unwrap(),
            AbiMethod::new("withdraw").unwrap(),
        ]);
        let instruction = decode_instruction(&abi, &[1, 0xAA, 0xBB]).unwrap();
        assert_eq!(instruction.method.name.as_str(), Ok("withdraw"));
        assert_eq!(instruction.payload, &[0xAA, 0xBB]);
    }
}
