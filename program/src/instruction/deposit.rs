use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use crate::{error::YieldFlowError, helpers::*, state::ProgramConfig};

/// Move `amount` mSOL from the user into the escrow and credit the stake.
///
/// Accounts:
/// 0. `[writable]` User stake PDA
/// 1. `[signer]`   User
/// 2. `[writable]` User mSOL token account
/// 3. `[writable]` Escrow mSOL token account
/// 4. `[]`         Config PDA
/// 5. `[]`         Token program
pub fn process_deposit(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [stake_info, user_info, user_msol_info, escrow_info, config_info, _token_program_info, _rest @ ..] =
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
    check_token_account(user_msol_info, &config.msol_mint, Some(user_info.key()))?;

    Transfer {
        from: user_msol_info,
        to: escrow_info,
        authority: user_info,
        amount,
    }
    .invoke()?;

    // Blend the new deposit in at the current rate so accrued dividends stay owed
    let held = stake.msol_amount();
    let new_base = weighted_base_value(held, stake.base_sol_value(), amount, config.msol_rate())?;
    let new_amount = held
        .checked_add(amount)
        .ok_or(YieldFlowError::MathOverflow)?;

    stake.set_msol_amount(new_amount);
    stake.set_base_sol_value(new_base);
    stake.set_last_update(Clock::get()?.unix_timestamp);

    log!("Deposited {} mSOL, total {}", amount, new_amount);
    Ok(())
}
