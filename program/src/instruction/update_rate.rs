use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::{error::YieldFlowError, helpers::*, state::ProgramConfig};

/// Publish the current mSOL/SOL exchange rate (lamports per mSOL).
///
/// Accounts:
/// 0. `[writable]` Config PDA
/// 1. `[signer]`   Admin
pub fn process_update_rate(accounts: &[AccountInfo], lamports_per_msol: u64) -> ProgramResult {
    let [config_info, admin_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if lamports_per_msol == 0 {
        return Err(YieldFlowError::InvalidRate.into());
    }

    let config = ProgramConfig::get_account_info_mut(config_info)?;
    require_admin(config, admin_info)?;

    let now = Clock::get()?.unix_timestamp;
    config.set_msol_rate(lamports_per_msol, now);

    log!("mSOL rate: {} lamports", lamports_per_msol);
    Ok(())
}
