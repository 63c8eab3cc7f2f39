use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use crate::{error::YieldFlowError, helpers::*, state::ProgramConfig};

/// Pay `amount` mSOL out of a program vault to the payout destination.
///
/// Accounts:
/// 0. `[]`         Config PDA
/// 1. `[signer]`   Admin
/// 2. `[writable]` Vault mSOL token account (authority = `["vault"]` PDA)
/// 3. `[]`         Vault authority PDA
/// 4. `[writable]` Destination mSOL token account
/// 5. `[]`         Payout program, must match the config
/// 6. `[]`         Token program
pub fn process_withdrawal(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [config_info, admin_info, vault_info, vault_authority_info, destination_info, payout_program_info, _token_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if amount == 0 {
        return Err(YieldFlowError::InvalidAmount.into());
    }

    let config = ProgramConfig::get_account_info(config_info)?;
    check_config_address(config_info, config.bump)?;
    require_admin(config, admin_info)?;
    // Unset until UpdateConfig names a payout program
    if config.payout_program == [0u8; 32] || payout_program_info.key() != &config.payout_program {
        return Err(YieldFlowError::PayoutProgramMismatch.into());
    }

    let (vault_authority, vault_bump) = find_vault_authority()?;
    if vault_authority_info.key() != &vault_authority {
        return Err(ProgramError::InvalidSeeds);
    }
    check_token_account(vault_info, &config.msol_mint, Some(&vault_authority))?;
    check_token_account(destination_info, &config.msol_mint, None)?;

    let bump = [vault_bump];
    let seeds = [Seed::from(VAULT_SEED), Seed::from(&bump[..])];
    Transfer {
        from: vault_info,
        to: destination_info,
        authority: vault_authority_info,
        amount,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    log!("Withdrawal of {} mSOL sent to payout destination", amount);
    Ok(())
}
