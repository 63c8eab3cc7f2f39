use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::{error::YieldFlowError, state::AccountKind};

/// Global program settings, stored at the `["config"]` PDA.
///
/// Every field is byte-aligned so the struct can be viewed in place over the
/// account data; integers are little-endian byte arrays.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct ProgramConfig {
    pub discriminator: u8,
    pub bump: u8,
    pub escrow_bump: u8,
    pub fees_enabled: u8,
    pub fee_rate_bps: [u8; 2],
    pub admin: Pubkey,
    pub marinade_program: Pubkey,
    pub msol_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub fee_account: Pubkey,
    pub escrow: Pubkey,
    /// External payout (Sanglass) program the admin routes withdrawals to.
    pub payout_program: Pubkey,
    /// Lamports of SOL per 1 mSOL.
    pub msol_rate: [u8; 8],
    pub rate_updated_at: [u8; 8],
}

impl ProgramConfig {
    pub const LEN: usize = core::mem::size_of::<ProgramConfig>();

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.discriminator == AccountKind::Config as u8
    }

    #[inline]
    pub fn fees_enabled(&self) -> bool {
        self.fees_enabled != 0
    }

    #[inline]
    pub fn fee_rate_bps(&self) -> u16 {
        u16::from_le_bytes(self.fee_rate_bps)
    }

    #[inline]
    pub fn set_fees(&mut self, enabled: bool, fee_rate_bps: u16) {
        self.fees_enabled = enabled as u8;
        self.fee_rate_bps = fee_rate_bps.to_le_bytes();
    }

    #[inline]
    pub fn msol_rate(&self) -> u64 {
        u64::from_le_bytes(self.msol_rate)
    }

    #[inline]
    pub fn rate_updated_at(&self) -> i64 {
        i64::from_le_bytes(self.rate_updated_at)
    }

    #[inline]
    pub fn set_msol_rate(&mut self, lamports_per_msol: u64, now: i64) {
        self.msol_rate = lamports_per_msol.to_le_bytes();
        self.rate_updated_at = now.to_le_bytes();
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: repr(C) with alignment 1 and the length was checked above
        let config = unsafe { &*(data.as_ptr() as *const Self) };
        if !config.is_initialized() {
            return Err(YieldFlowError::StakingNotInitialized.into());
        }
        Ok(config)
    }

    pub fn from_bytes_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// Read the config from an account owned by this program.
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
        let config = Self::from_bytes_mut(unsafe { account.borrow_mut_data_unchecked() })?;
        if !config.is_initialized() {
            return Err(YieldFlowError::StakingNotInitialized.into());
        }
        Ok(config)
    }
}
