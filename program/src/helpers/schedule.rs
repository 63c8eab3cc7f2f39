use pinocchio::program_error::ProgramError;

use crate::{
    error::{to_program_error, YieldFlowError},
    helpers::constant::{DAYS_PER_MONTH, SECONDS_PER_DAY},
    state::{PayoutSchedule, UserStake},
};

pub struct ScheduleCalculator;

impl ScheduleCalculator {
    /// Next payout time for `schedule` seen from `current_timestamp`.
    /// `Disabled` yields 0.
    pub fn calculate_next_payout(
        schedule: PayoutSchedule,
        current_timestamp: i64,
    ) -> Result<i64, ProgramError> {
        if current_timestamp < 0 {
            return Err(YieldFlowError::InvalidTimestamp.into());
        }

        let add = |secs: i64| {
            current_timestamp
                .checked_add(secs)
                .ok_or_else(|| to_program_error(YieldFlowError::MathOverflow))
        };

        match schedule {
            PayoutSchedule::Disabled => Ok(0),
            PayoutSchedule::Daily => add(SECONDS_PER_DAY),

            PayoutSchedule::Weekly(weekday) => {
                // 1970-01-01 was a Thursday
                let current_weekday = (current_timestamp / SECONDS_PER_DAY + 4) % 7;
                let weekday = weekday as i64;
                let days_to_add = if weekday > current_weekday {
                    weekday - current_weekday
                } else {
                    7 - (current_weekday - weekday)
                };
                add(days_to_add * SECONDS_PER_DAY)
            }

            PayoutSchedule::Monthly(day_of_month) => {
                let next_month = add(DAYS_PER_MONTH * SECONDS_PER_DAY)?;
                let midnight = next_month - next_month % SECONDS_PER_DAY;
                midnight
                    .checked_add((day_of_month as i64 - 1) * SECONDS_PER_DAY)
                    .ok_or_else(|| to_program_error(YieldFlowError::MathOverflow))
            }

            PayoutSchedule::Custom(interval_secs) => add(interval_secs),
        }
    }

    /// Whether a scheduled claim of `current_dividend` may run now.
    pub fn should_payout(
        user_stake: &UserStake,
        current_dividend: u64,
        current_timestamp: i64,
    ) -> Result<bool, ProgramError> {
        if !user_stake.auto_claim_enabled()
            || user_stake.payout_schedule()? == PayoutSchedule::Disabled
            || current_dividend == 0
            || current_dividend < user_stake.min_dividend_amount()
        {
            return Ok(false);
        }

        Ok(current_timestamp >= user_stake.next_payout_date())
    }

    pub fn validate_schedule(schedule: &PayoutSchedule) -> Result<(), ProgramError> {
        match schedule {
            PayoutSchedule::Weekly(day) if *day > 6 => Err(YieldFlowError::InvalidWeekday.into()),
            PayoutSchedule::Monthly(day) if *day < 1 || *day > 28 => {
                Err(YieldFlowError::InvalidMonthDay.into())
            }
            PayoutSchedule::Custom(secs) if *secs <= 0 => {
                Err(YieldFlowError::InvalidCustomInterval.into())
            }
            _ => Ok(()),
        }
    }
}
