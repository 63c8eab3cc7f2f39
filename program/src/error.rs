use pinocchio::program_error::ProgramError;

/// Custom error codes surfaced as `ProgramError::Custom(code)`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldFlowError {
    InvalidMarinadeProgram = 0,
    MathOverflow,
    DividendTooSmall,
    Unauthorized,
    InvalidUsdcMint,
    StakingNotInitialized,
    InvalidTimestamp,
    EscrowAccountMismatch,
    AutoClaimDisabled,
    PayoutNotDue,
    DividendBelowMinimum,
    NoDividendToClaim,
    InvalidWeekday,
    InvalidMonthDay,
    InvalidCustomInterval,
    InvalidAmount,
    AlreadyInitialized,
    InvalidFeeRate,
    InvalidRate,
    PayoutProgramMismatch,
}

impl YieldFlowError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            YieldFlowError::InvalidMarinadeProgram => "Invalid Marinade program",
            YieldFlowError::MathOverflow => "Math overflow",
            YieldFlowError::DividendTooSmall => "Dividend too small",
            YieldFlowError::Unauthorized => "Unauthorized",
            YieldFlowError::InvalidUsdcMint => "Invalid USDC mint",
            YieldFlowError::StakingNotInitialized => "Staking not initialized",
            YieldFlowError::InvalidTimestamp => "Invalid timestamp",
            YieldFlowError::EscrowAccountMismatch => "Escrow account mismatch",
            YieldFlowError::AutoClaimDisabled => "Auto claim disabled",
            YieldFlowError::PayoutNotDue => "Payout not due",
            YieldFlowError::DividendBelowMinimum => "Dividend below minimum",
            YieldFlowError::NoDividendToClaim => "No dividend to claim",
            YieldFlowError::InvalidWeekday => "Invalid weekday",
            YieldFlowError::InvalidMonthDay => "Invalid day of month",
            YieldFlowError::InvalidCustomInterval => "Invalid custom interval",
            YieldFlowError::InvalidAmount => "Invalid amount",
            YieldFlowError::AlreadyInitialized => "Already initialized",
            YieldFlowError::InvalidFeeRate => "Invalid fee rate",
            YieldFlowError::InvalidRate => "Invalid mSOL rate",
            YieldFlowError::PayoutProgramMismatch => "Payout program mismatch",
        }
    }
}

impl From<YieldFlowError> for ProgramError {
    fn from(err: YieldFlowError) -> Self {
        ProgramError::Custom(err.code())
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: YieldFlowError) -> ProgramError {
    err.into()
}
