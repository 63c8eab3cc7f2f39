use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer as SystemTransfer};
use pinocchio_token::{instructions::Transfer, state::TokenAccount};

use crate::{
    error::YieldFlowError,
    helpers::constant::{CONFIG_SEED, ESCROW_SEED, USER_STAKE_SEED, VAULT_SEED},
    state::{ProgramConfig, UserStake},
};

#[inline]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// The signer must be the admin recorded in `config`.
#[inline]
pub fn require_admin(config: &ProgramConfig, admin: &AccountInfo) -> ProgramResult {
    require_signer(admin)?;
    if !config.is_admin(admin.key()) {
        return Err(YieldFlowError::Unauthorized.into());
    }
    Ok(())
}

/// Load the caller's stake: `user` must sign and own the PDA.
pub fn load_user_stake_mut<'a>(
    stake_info: &'a AccountInfo,
    user_info: &AccountInfo,
) -> Result<&'a mut UserStake, ProgramError> {
    require_signer(user_info)?;
    let stake = UserStake::get_account_info_mut(stake_info)?;
    if &stake.user != user_info.key() {
        return Err(YieldFlowError::Unauthorized.into());
    }
    check_user_stake_address(stake_info, user_info.key(), stake.bump)?;
    Ok(stake)
}

#[inline]
pub fn read_u64(data: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = data
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(u64::from_le_bytes(bytes))
}

// ---- PDAs ----

pub fn find_config_address() -> Result<(Pubkey, u8), ProgramError> {
    pubkey::try_find_program_address(&[CONFIG_SEED], &crate::ID).ok_or(ProgramError::InvalidSeeds)
}

pub fn find_escrow_authority() -> Result<(Pubkey, u8), ProgramError> {
    pubkey::try_find_program_address(&[ESCROW_SEED], &crate::ID).ok_or(ProgramError::InvalidSeeds)
}

pub fn find_vault_authority() -> Result<(Pubkey, u8), ProgramError> {
    pubkey::try_find_program_address(&[VAULT_SEED], &crate::ID).ok_or(ProgramError::InvalidSeeds)
}

pub fn find_user_stake_address(user: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    pubkey::try_find_program_address(&[USER_STAKE_SEED, user.as_ref()], &crate::ID)
        .ok_or(ProgramError::InvalidSeeds)
}

/// The config account must be the `["config"]` PDA.
pub fn check_config_address(config_info: &AccountInfo, bump: u8) -> ProgramResult {
    let expected = pubkey::create_program_address(&[CONFIG_SEED, &[bump]], &crate::ID)?;
    if config_info.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

pub fn check_user_stake_address(stake_info: &AccountInfo, user: &Pubkey, bump: u8) -> ProgramResult {
    let expected =
        pubkey::create_program_address(&[USER_STAKE_SEED, user.as_ref(), &[bump]], &crate::ID)?;
    if stake_info.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

pub fn check_escrow_authority(authority_info: &AccountInfo, bump: u8) -> ProgramResult {
    let expected = pubkey::create_program_address(&[ESCROW_SEED, &[bump]], &crate::ID)?;
    if authority_info.key() != &expected {
        return Err(YieldFlowError::EscrowAccountMismatch.into());
    }
    Ok(())
}

/// Allocate a rent-exempt account owned by this program at a PDA.
///
/// A PDA that already holds lamports (anyone can send them) is topped up to
/// rent exemption, then allocated and assigned in place.
pub fn create_pda_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    seeds: &[Seed],
) -> ProgramResult {
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let signer = [Signer::from(seeds)];

    let current = account.lamports();
    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: rent_exempt,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(&signer);
    }

    let top_up = rent_exempt.saturating_sub(current);
    if top_up > 0 {
        SystemTransfer {
            from: payer,
            to: account,
            lamports: top_up,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(&signer)?;
    Assign {
        account,
        owner: &crate::ID,
    }
    .invoke_signed(&signer)
}

// ---- Token accounts ----

/// `account` must be the escrow recorded in `config`, holding mSOL.
pub fn check_escrow(config: &ProgramConfig, account: &AccountInfo) -> ProgramResult {
    if account.key() != &config.escrow {
        return Err(YieldFlowError::EscrowAccountMismatch.into());
    }
    let escrow = TokenAccount::from_account_info(account)?;
    if escrow.mint() != &config.msol_mint {
        return Err(YieldFlowError::EscrowAccountMismatch.into());
    }
    Ok(())
}

/// A token account holding `mint`, optionally owned by `owner`.
pub fn check_token_account(
    account: &AccountInfo,
    mint: &Pubkey,
    owner: Option<&Pubkey>,
) -> ProgramResult {
    let token = TokenAccount::from_account_info(account)?;
    if token.mint() != mint {
        return Err(ProgramError::InvalidAccountData);
    }
    if let Some(owner) = owner {
        if token.owner() != owner {
            return Err(ProgramError::IllegalOwner);
        }
    }
    Ok(())
}

/// Move mSOL out of the escrow, signed by the escrow authority PDA.
pub fn transfer_from_escrow(
    escrow: &AccountInfo,
    destination: &AccountInfo,
    escrow_authority: &AccountInfo,
    amount: u64,
    escrow_bump: u8,
) -> ProgramResult {
    if amount == 0 {
        return Ok(());
    }
    let bump = [escrow_bump];
    let seeds = [Seed::from(ESCROW_SEED), Seed::from(&bump[..])];
    Transfer {
        from: escrow,
        to: destination,
        authority: escrow_authority,
        amount,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])
}
