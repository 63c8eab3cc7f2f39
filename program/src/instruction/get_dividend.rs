use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
};

use crate::{
    helpers::*,
    state::{ProgramConfig, UserStake},
};

/// Pending dividend and whether an auto claim would go through now.
///
/// Accounts:
/// 0. `[]` User stake PDA
/// 1. `[]` Config PDA
pub fn process_get_dividend(accounts: &[AccountInfo]) -> Result<[u8; DIVIDEND_VIEW_LEN], ProgramError> {
    let [stake_info, config_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let stake = UserStake::get_account_info(stake_info)?;
    let config = ProgramConfig::get_account_info(config_info)?;
    check_config_address(config_info, config.bump)?;

    let now = Clock::get()?.unix_timestamp;
    dividend_view(stake, config, now)
}

/// `[dividend: u64 LE][due: u8]`
pub fn dividend_view(
    stake: &UserStake,
    config: &ProgramConfig,
    now: i64,
) -> Result<[u8; DIVIDEND_VIEW_LEN], ProgramError> {
    let dividend = pending_dividend(stake.msol_amount(), stake.base_sol_value(), config.msol_rate())?;
    let due = ScheduleCalculator::should_payout(stake, dividend, now)?;

    let mut out = [0u8; DIVIDEND_VIEW_LEN];
    out[..8].copy_from_slice(&dividend.to_le_bytes());
    out[8] = due as u8;
    Ok(out)
}
