use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    msg,
};

use crate::contract::LendingContract;
use crate::error::LendingError;
use crate::instructions::decode_instruction;

pub fn process_instruction(
    program_id: &Pubkey,
    _accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let contract = LendingContract::with_program_id(*program_id);
    let instruction = decode_instruction(contract.abi(), instruction_data)?;

    // The lending ABI declares no methods, so nothing reaches this point.
    msg!("Instruction: {} has no handler", instruction.method.name);
    Err(LendingError::UnknownInstruction.into())
}
