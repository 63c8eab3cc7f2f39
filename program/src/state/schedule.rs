use pinocchio::program_error::ProgramError;

use crate::error::YieldFlowError;

/// When scheduled (auto) dividend claims become due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PayoutSchedule {
    #[default]
    Disabled,
    Daily,
    /// 0-6, Sunday first.
    Weekly(u8),
    /// 1-28.
    Monthly(u8),
    /// Interval in seconds.
    Custom(i64),
}

impl PayoutSchedule {
    pub const DISABLED: u8 = 0;
    pub const DAILY: u8 = 1;
    pub const WEEKLY: u8 = 2;
    pub const MONTHLY: u8 = 3;
    pub const CUSTOM: u8 = 4;

    /// Split into the `(kind, value)` pair stored in `UserStake`.
    pub fn encode(&self) -> (u8, i64) {
        match *self {
            PayoutSchedule::Disabled => (Self::DISABLED, 0),
            PayoutSchedule::Daily => (Self::DAILY, 0),
            PayoutSchedule::Weekly(day) => (Self::WEEKLY, day as i64),
            PayoutSchedule::Monthly(day) => (Self::MONTHLY, day as i64),
            PayoutSchedule::Custom(secs) => (Self::CUSTOM, secs),
        }
    }

    /// Rebuild from a stored or instruction-supplied `(kind, value)` pair.
    /// Bounds are not checked here; see `ScheduleCalculator::validate_schedule`.
    pub fn decode(kind: u8, value: i64) -> Result<Self, ProgramError> {
        let day = |v: i64| u8::try_from(v).map_err(|_| ProgramError::InvalidInstructionData);
        match kind {
            Self::DISABLED => Ok(PayoutSchedule::Disabled),
            Self::DAILY => Ok(PayoutSchedule::Daily),
            Self::WEEKLY => Ok(PayoutSchedule::Weekly(
                day(value).map_err(|_| ProgramError::from(YieldFlowError::InvalidWeekday))?,
            )),
            Self::MONTHLY => Ok(PayoutSchedule::Monthly(
                day(value).map_err(|_| ProgramError::from(YieldFlowError::InvalidMonthDay))?,
            )),
            Self::CUSTOM => Ok(PayoutSchedule::Custom(value)),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimMode {
    /// Follows the payout schedule, auto-claim flag and minimum amount.
    Auto,
    /// Forced payout, skips the schedule checks.
    Manual,
}
