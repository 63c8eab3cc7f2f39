use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::{error::YieldFlowError, helpers::*, state::ProgramConfig};

/// Return `amount` of the user's principal mSOL from the escrow.
///
/// Accounts:
/// 0. `[writable]` User stake PDA
/// 1. `[signer]`   User
/// 2. `[]`         Config PDA
/// 3. `[writable]` Escrow mSOL token account
/// 4. `[]`         Escrow authority PDA (`["escrow"]`)
/// 5. `[writable]` User mSOL token account
/// 6. `[]`         Token program
pub fn process_withdraw(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [stake_info, user_info, config_info, escrow_info, escrow_authority_info, user_msol_info, _token_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if amount == 0 {
        return Err(YieldFlowError::InvalidAmount.into());
    }

    let stake = load_user_stake_mut(stake_info, user_info)?;
    let config = ProgramConfig::get_account_info(config_info)?;
    check_config_address(config_info, config.bump)?;
    check_escrow(config, escrow_info)?;
    check_escrow_authority(escrow_authority_info, config.escrow_bump)?;
    check_token_account(user_msol_info, &config.msol_mint, Some(user_info.key()))?;

    let remaining = stake
        .msol_amount()
        .checked_sub(amount)
        .ok_or(ProgramError::InsufficientFunds)?;

    transfer_from_escrow(
        escrow_info,
        user_msol_info,
        escrow_authority_info,
        amount,
        config.escrow_bump,
    )?;

    // Base value is per mSOL, so the remaining position keeps its accrued dividend
    stake.set_msol_amount(remaining);
    stake.set_last_update(Clock::get()?.unix_timestamp);

    log!("Withdrew {} mSOL, remaining {}", amount, remaining);
    Ok(())
}
