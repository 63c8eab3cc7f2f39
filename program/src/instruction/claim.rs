use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::YieldFlowError,
    helpers::*,
    state::{ClaimMode, PayoutSchedule, ProgramConfig, UserStake},
};

/// Outcome of a claim, before any tokens move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DividendPayout {
    /// Dividend value in lamports.
    pub dividend: u64,
    /// mSOL leaving the escrow (user share + fee).
    pub msol_out: u64,
    pub to_user: u64,
    pub fee: u64,
}

/// Apply the claim rules for `mode` and size the payout.
pub fn plan_claim(
    stake: &UserStake,
    config: &ProgramConfig,
    mode: ClaimMode,
    now: i64,
) -> Result<DividendPayout, ProgramError> {
    let rate = config.msol_rate();
    let dividend = calculate_dividend(stake.msol_amount(), stake.base_sol_value(), rate)?;

    match mode {
        ClaimMode::Auto => {
            if !stake.auto_claim_enabled() || stake.payout_schedule()? == PayoutSchedule::Disabled {
                return Err(YieldFlowError::AutoClaimDisabled.into());
            }
            if now < stake.next_payout_date() {
                return Err(YieldFlowError::PayoutNotDue.into());
            }
            if dividend < stake.min_dividend_amount() {
                return Err(YieldFlowError::DividendBelowMinimum.into());
            }
        }
        ClaimMode::Manual => {
            if dividend == 0 {
                return Err(YieldFlowError::NoDividendToClaim.into());
            }
        }
    }

    let msol_out = lamports_to_msol(dividend, rate)?;
    if msol_out == 0 {
        return Err(YieldFlowError::DividendTooSmall.into());
    }
    if msol_out > stake.msol_amount() {
        return Err(ProgramError::InsufficientFunds);
    }

    let fee_rate = if config.fees_enabled() {
        config.fee_rate_bps()
    } else {
        0
    };
    let (to_user, fee) = split_fee(msol_out, fee_rate)?;

    Ok(DividendPayout {
        dividend,
        msol_out,
        to_user,
        fee,
    })
}

/// Pay the accrued dividend out of the escrow as mSOL.
///
/// Accounts:
/// 0. `[writable]` User stake PDA
/// 1. `[signer]`   User
/// 2. `[]`         Config PDA
/// 3. `[writable]` Escrow mSOL token account
/// 4. `[]`         Escrow authority PDA (`["escrow"]`)
/// 5. `[writable]` User mSOL token account
/// 6. `[writable]` Fee mSOL token account
/// 7. `[]`         Marinade program, must match the config
/// 8. `[]`         Token program
pub fn process_claim_dividend(accounts: &[AccountInfo], mode: ClaimMode) -> ProgramResult {
    let [stake_info, user_info, config_info, escrow_info, escrow_authority_info, user_msol_info, fee_account_info, marinade_program_info, _token_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let stake = load_user_stake_mut(stake_info, user_info)?;
    let config = ProgramConfig::get_account_info(config_info)?;
    check_config_address(config_info, config.bump)?;
    if &config.marinade_program != marinade_program_info.key() {
        return Err(YieldFlowError::InvalidMarinadeProgram.into());
    }
    check_escrow(config, escrow_info)?;
    check_escrow_authority(escrow_authority_info, config.escrow_bump)?;
    check_token_account(user_msol_info, &config.msol_mint, Some(user_info.key()))?;
    if fee_account_info.key() != &config.fee_account {
        return Err(ProgramError::InvalidAccountData);
    }

    let now = Clock::get()?.unix_timestamp;
    let payout = plan_claim(stake, config, mode, now)?;

    transfer_from_escrow(
        escrow_info,
        user_msol_info,
        escrow_authority_info,
        payout.to_user,
        config.escrow_bump,
    )?;
    transfer_from_escrow(
        escrow_info,
        fee_account_info,
        escrow_authority_info,
        payout.fee,
        config.escrow_bump,
    )?;

    stake.set_msol_amount(stake.msol_amount() - payout.msol_out);
    stake.set_base_sol_value(config.msol_rate());
    stake.set_last_update(now);
    stake.record_dividend(payout.dividend)?;

    if mode == ClaimMode::Auto {
        let next = ScheduleCalculator::calculate_next_payout(stake.payout_schedule()?, now)?;
        stake.set_next_payout_date(next);
    }

    log!(
        "Dividend paid: {} lamports as {} mSOL (fee {})",
        payout.dividend,
        payout.msol_out,
        payout.fee
    );
    Ok(())
}
