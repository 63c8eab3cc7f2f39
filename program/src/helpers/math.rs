use pinocchio::program_error::ProgramError;

use crate::{
    error::YieldFlowError,
    helpers::constant::{LAMPORTS_PER_SOL, MAX_BPS},
};

/// Dividend in lamports owed on `msol_amount` when 1 mSOL moved from
/// `base_sol_value` to `current_sol_value` lamports.
pub fn calculate_dividend(
    msol_amount: u64,
    base_sol_value: u64,
    current_sol_value: u64,
) -> Result<u64, ProgramError> {
    if current_sol_value <= base_sol_value {
        return Err(YieldFlowError::DividendTooSmall.into());
    }

    let value_diff = (current_sol_value - base_sol_value) as u128;
    let raw_dividend = (msol_amount as u128)
        .checked_mul(value_diff)
        .ok_or(YieldFlowError::MathOverflow)?;

    u64::try_from(raw_dividend / LAMPORTS_PER_SOL as u128)
        .map_err(|_| YieldFlowError::MathOverflow.into())
}

/// Same as `calculate_dividend` but reports "nothing owed" as zero.
pub fn pending_dividend(
    msol_amount: u64,
    base_sol_value: u64,
    current_sol_value: u64,
) -> Result<u64, ProgramError> {
    if current_sol_value <= base_sol_value {
        return Ok(0);
    }
    calculate_dividend(msol_amount, base_sol_value, current_sol_value)
}

/// mSOL (rounded down) worth `lamports` at `lamports_per_msol`.
pub fn lamports_to_msol(lamports: u64, lamports_per_msol: u64) -> Result<u64, ProgramError> {
    if lamports_per_msol == 0 {
        return Err(YieldFlowError::InvalidRate.into());
    }
    let msol = (lamports as u128)
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .ok_or(YieldFlowError::MathOverflow)?
        / lamports_per_msol as u128;
    u64::try_from(msol).map_err(|_| YieldFlowError::MathOverflow.into())
}

/// Split `amount` into `(to_user, fee)` for a fee in basis points.
pub fn split_fee(amount: u64, fee_rate_bps: u16) -> Result<(u64, u64), ProgramError> {
    if fee_rate_bps > MAX_BPS {
        return Err(YieldFlowError::InvalidFeeRate.into());
    }
    let fee = (amount as u128 * fee_rate_bps as u128 / MAX_BPS as u128) as u64;
    Ok((amount - fee, fee))
}

/// Base value after adding `added` mSOL at `current_rate` to a position of
/// `held` mSOL at `base`. Amount-weighted so the accrued dividend is unchanged.
pub fn weighted_base_value(
    held: u64,
    base: u64,
    added: u64,
    current_rate: u64,
) -> Result<u64, ProgramError> {
    let total = (held as u128)
        .checked_add(added as u128)
        .ok_or(YieldFlowError::MathOverflow)?;
    if total == 0 {
        return Ok(current_rate);
    }
    let weighted = (held as u128 * base as u128)
        .checked_add(added as u128 * current_rate as u128)
        .ok_or(YieldFlowError::MathOverflow)?;
    u64::try_from(weighted / total).map_err(|_| YieldFlowError::MathOverflow.into())
}

/// Interest earned on `principal` after `periods` compounding periods of
/// `rate_per_period_bps` each. Each period rounds down.
pub fn calculate_compound_interest(
    principal: u64,
    rate_per_period_bps: u64,
    periods: u64,
) -> Result<u64, ProgramError> {
    if rate_per_period_bps == 0 || periods == 0 {
        return Ok(0);
    }

    let denominator = MAX_BPS as u128;
    let factor = denominator
        .checked_add(rate_per_period_bps as u128)
        .ok_or(YieldFlowError::MathOverflow)?;
    let mut amount = principal as u128;
    for _ in 0..periods {
        amount = amount
            .checked_mul(factor)
            .ok_or(YieldFlowError::MathOverflow)?
            / denominator;
    }

    u64::try_from(amount - principal as u128).map_err(|_| YieldFlowError::MathOverflow.into())
}
