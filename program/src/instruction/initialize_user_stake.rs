use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::YieldFlowError,
    helpers::*,
    state::{AccountKind, PayoutSchedule, ProgramConfig, UserStake},
};

/// Open a stake position for the signing user.
///
/// Accounts:
/// 0. `[writable]`         User stake PDA (`["user-stake", user]`)
/// 1. `[writable, signer]` User, pays for the account
/// 2. `[]`                 Config PDA
/// 3. `[]`                 Marinade program, must match the config
/// 4. `[]`                 System program
pub fn process_initialize_user_stake(accounts: &[AccountInfo]) -> ProgramResult {
    let [stake_info, user_info, config_info, marinade_program_info, _system_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(user_info)?;

    let config = ProgramConfig::get_account_info(config_info)?;
    check_config_address(config_info, config.bump)?;
    if &config.marinade_program != marinade_program_info.key() {
        return Err(YieldFlowError::InvalidMarinadeProgram.into());
    }

    if stake_info.owner() == &crate::ID || !stake_info.data_is_empty() {
        return Err(YieldFlowError::AlreadyInitialized.into());
    }
    let (stake_key, bump) = find_user_stake_address(user_info.key())?;
    if stake_info.key() != &stake_key {
        return Err(ProgramError::InvalidSeeds);
    }

    let bump_seed = [bump];
    let seeds = [
        Seed::from(USER_STAKE_SEED),
        Seed::from(user_info.key().as_ref()),
        Seed::from(&bump_seed[..]),
    ];
    create_pda_account(user_info, stake_info, UserStake::LEN, &seeds)?;

    let now = Clock::get()?.unix_timestamp;
    let stake = UserStake::from_bytes_mut(unsafe { stake_info.borrow_mut_data_unchecked() })?;
    stake.discriminator = AccountKind::UserStake as u8;
    stake.bump = bump;
    stake.user = *user_info.key();
    stake.set_msol_amount(0);
    stake.set_base_sol_value(config.msol_rate());
    stake.set_last_update(now);
    stake.set_schedule(PayoutSchedule::Disabled, false, 0);
    stake.set_next_payout_date(0);

    log!("User stake initialized with bump: {}", bump);
    Ok(())
}
