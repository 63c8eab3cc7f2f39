use crate::{
    helpers::read_u64,
    instruction::{self, SetScheduleArgs, UpdateConfigArgs, YieldFlowInstruction},
    state::ClaimMode,
};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Single-byte discriminator + fixed-size payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    let no_payload = |data: &[u8]| -> ProgramResult {
        if !data.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(())
    };

    match YieldFlowInstruction::try_from(disc)? {
        // --------------------------------------------------------------------
        // Administration
        // --------------------------------------------------------------------
        YieldFlowInstruction::Initialize => {
            msg!("Instruction: Initialize");
            no_payload(payload)?;
            instruction::initialize::process_initialize(accounts)
        }

        YieldFlowInstruction::UpdateAdmin => {
            msg!("Instruction: UpdateAdmin");
            no_payload(payload)?;
            instruction::update_admin::process_update_admin(accounts)
        }

        YieldFlowInstruction::UpdateConfig => {
            msg!("Instruction: UpdateConfig");
            let args = UpdateConfigArgs::parse(payload)?;
            instruction::update_config::process_update_config(accounts, args)
        }

        YieldFlowInstruction::UpdateRate => {
            msg!("Instruction: UpdateRate");
            let lamports_per_msol = read_u64(payload)?;
            instruction::update_rate::process_update_rate(accounts, lamports_per_msol)
        }

        // --------------------------------------------------------------------
        // User positions
        // --------------------------------------------------------------------
        YieldFlowInstruction::InitializeUserStake => {
            msg!("Instruction: InitializeUserStake");
            no_payload(payload)?;
            instruction::initialize_user_stake::process_initialize_user_stake(accounts)
        }

        YieldFlowInstruction::Deposit => {
            msg!("Instruction: Deposit");
            let amount = read_u64(payload)?;
            instruction::deposit::process_deposit(accounts, amount)
        }

        YieldFlowInstruction::SetSchedule => {
            msg!("Instruction: SetSchedule");
            let args = SetScheduleArgs::parse(payload)?;
            instruction::set_schedule::process_set_schedule(accounts, args)
        }

        YieldFlowInstruction::Withdraw => {
            msg!("Instruction: Withdraw");
            let amount = read_u64(payload)?;
            instruction::withdraw::process_withdraw(accounts, amount)
        }

        // --------------------------------------------------------------------
        // Dividends
        // --------------------------------------------------------------------
        YieldFlowInstruction::ClaimDividendAuto => {
            msg!("Instruction: ClaimDividendAuto");
            no_payload(payload)?;
            instruction::claim::process_claim_dividend(accounts, ClaimMode::Auto)
        }

        YieldFlowInstruction::ClaimDividendManual => {
            msg!("Instruction: ClaimDividendManual");
            no_payload(payload)?;
            instruction::claim::process_claim_dividend(accounts, ClaimMode::Manual)
        }

        YieldFlowInstruction::ProcessWithdrawal => {
            msg!("Instruction: ProcessWithdrawal");
            let amount = read_u64(payload)?;
            instruction::process_withdrawal::process_withdrawal(accounts, amount)
        }

        YieldFlowInstruction::GetDividend => {
            msg!("Instruction: GetDividend");
            let data = instruction::get_dividend::process_get_dividend(accounts)?;

            #[cfg(not(feature = "std"))]
            {
                // Return data for on-chain consumers
                pinocchio::program::set_return_data(&data);
            }

            // Host builds (std): no return data channel
            #[cfg(feature = "std")]
            {
                let _ = data;
            }

            Ok(())
        }
    }
}
