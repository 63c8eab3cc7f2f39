use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{
    error::YieldFlowError,
    state::{AccountKind, PayoutSchedule},
};

/// Per-user position, stored at the `["user-stake", user]` PDA.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct UserStake {
    pub discriminator: u8,
    pub bump: u8,
    pub auto_claim_enabled: u8,
    pub schedule_kind: u8,
    pub schedule_value: [u8; 8],
    pub user: Pubkey,
    /// mSOL held in escrow on behalf of `user`.
    pub msol_amount: [u8; 8],
    /// Lamports per mSOL at which nothing is owed.
    pub base_sol_value: [u8; 8],
    pub last_update: [u8; 8],
    pub last_dividend: [u8; 8],
    pub total_dividends: [u8; 8],
    pub next_payout_date: [u8; 8],
    pub min_dividend_amount: [u8; 8],
}

impl UserStake {
    pub const LEN: usize = core::mem::size_of::<UserStake>();

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.discriminator == AccountKind::UserStake as u8
    }

    #[inline]
    pub fn msol_amount(&self) -> u64 {
        u64::from_le_bytes(self.msol_amount)
    }

    #[inline]
    pub fn set_msol_amount(&mut self, amount: u64) {
        self.msol_amount = amount.to_le_bytes();
    }

    #[inline]
    pub fn base_sol_value(&self) -> u64 {
        u64::from_le_bytes(self.base_sol_value)
    }

    #[inline]
    pub fn set_base_sol_value(&mut self, value: u64) {
        self.base_sol_value = value.to_le_bytes();
    }

    #[inline]
    pub fn last_update(&self) -> i64 {
        i64::from_le_bytes(self.last_update)
    }

    #[inline]
    pub fn set_last_update(&mut self, ts: i64) {
        self.last_update = ts.to_le_bytes();
    }

    #[inline]
    pub fn last_dividend(&self) -> u64 {
        u64::from_le_bytes(self.last_dividend)
    }

    #[inline]
    pub fn total_dividends(&self) -> u64 {
        u64::from_le_bytes(self.total_dividends)
    }

    /// Record a paid dividend, keeping the running total.
    pub fn record_dividend(&mut self, dividend: u64) -> Result<(), ProgramError> {
        let total = self
            .total_dividends()
            .checked_add(dividend)
            .ok_or(YieldFlowError::MathOverflow)?;
        self.last_dividend = dividend.to_le_bytes();
        self.total_dividends = total.to_le_bytes();
        Ok(())
    }

    #[inline]
    pub fn next_payout_date(&self) -> i64 {
        i64::from_le_bytes(self.next_payout_date)
    }

    #[inline]
    pub fn set_next_payout_date(&mut self, ts: i64) {
        self.next_payout_date = ts.to_le_bytes();
    }

    #[inline]
    pub fn min_dividend_amount(&self) -> u64 {
        u64::from_le_bytes(self.min_dividend_amount)
    }

    #[inline]
    pub fn auto_claim_enabled(&self) -> bool {
        self.auto_claim_enabled != 0
    }

    pub fn payout_schedule(&self) -> Result<PayoutSchedule, ProgramError> {
        PayoutSchedule::decode(self.schedule_kind, i64::from_le_bytes(self.schedule_value))
    }

    pub fn set_schedule(
        &mut self,
        schedule: PayoutSchedule,
        auto_claim: bool,
        min_dividend_amount: u64,
    ) {
        let (kind, value) = schedule.encode();
        self.schedule_kind = kind;
        self.schedule_value = value.to_le_bytes();
        self.auto_claim_enabled = auto_claim as u8;
        self.min_dividend_amount = min_dividend_amount.to_le_bytes();
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let stake = unsafe { &*(data.as_ptr() as *const Self) };
        if !stake.is_initialized() {
            return Err(YieldFlowError::StakingNotInitialized.into());
        }
        Ok(stake)
    }

    pub fn from_bytes_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    #[inline]
    pub fn get_account_info(account: &AccountInfo) -> Result<&Self, ProgramError> {
        if account.owner() != &crate::ID {
            return Err(ProgramError::InvalidAccountOwner);
        }
        Self::from_bytes(unsafe { account.borrow_data_unchecked() })
    }

    #[inline]
    pub fn get_account_info_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        if account.owner() != &crate::ID {
            return Err(ProgramError::InvalidAccountOwner);
        }
        if !account.is_writable() {
            return Err(ProgramError::InvalidAccountData);
        }
        let stake = Self::from_bytes_mut(unsafe { account.borrow_mut_data_unchecked() })?;
        if !stake.is_initialized() {
            return Err(YieldFlowError::StakingNotInitialized.into());
        }
        Ok(stake)
    }
}
