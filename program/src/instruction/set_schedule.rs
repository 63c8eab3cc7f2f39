use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};

use crate::{helpers::*, state::PayoutSchedule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetScheduleArgs {
    pub schedule: PayoutSchedule,
    pub auto_claim: bool,
    pub min_amount: u64,
}

impl SetScheduleArgs {
    pub const LEN: usize = 1 + 8 + 1 + 8;

    /// `[kind: u8][value: i64 LE][auto_claim: u8][min_amount: u64 LE]`
    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let value = i64::from_le_bytes(
            data[1..9]
                .try_into()
                .map_err(|_| ProgramError::InvalidInstructionData)?,
        );
        let schedule = PayoutSchedule::decode(data[0], value)?;
        let auto_claim = match data[9] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidInstructionData),
        };
        let min_amount = read_u64(&data[10..18])?;
        Ok(Self {
            schedule,
            auto_claim,
            min_amount,
        })
    }
}

/// Change the payout schedule and recompute the next payout date.
///
/// Accounts:
/// 0. `[writable]` User stake PDA
/// 1. `[signer]`   User
pub fn process_set_schedule(accounts: &[AccountInfo], args: SetScheduleArgs) -> ProgramResult {
    let [stake_info, user_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    ScheduleCalculator::validate_schedule(&args.schedule)?;
    let stake = load_user_stake_mut(stake_info, user_info)?;

    let now = Clock::get()?.unix_timestamp;
    let next_payout = ScheduleCalculator::calculate_next_payout(args.schedule, now)?;

    stake.set_schedule(args.schedule, args.auto_claim, args.min_amount);
    stake.set_next_payout_date(next_payout);
    stake.set_last_update(now);
    Ok(())
}
