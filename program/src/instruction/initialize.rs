use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    sysvars::{clock::Clock, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::state::Mint;

use crate::{
    error::YieldFlowError,
    helpers::*,
    state::{AccountKind, ProgramConfig},
};

/// Create the program config. Takes no instruction data.
///
/// Accounts:
/// 0. `[writable]`         Config PDA (`["config"]`)
/// 1. `[writable, signer]` Admin, pays for the config account
/// 2. `[]`                 Marinade program
/// 3. `[]`                 mSOL mint
/// 4. `[]`                 USDC mint
/// 5. `[]`                 Escrow mSOL token account (authority = `["escrow"]` PDA)
/// 6. `[]`                 Fee mSOL token account
/// 7. `[]`                 System program
pub fn process_initialize(accounts: &[AccountInfo]) -> ProgramResult {
    let [config_info, admin_info, marinade_program_info, msol_mint_info, usdc_mint_info, escrow_info, fee_account_info, _system_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(admin_info)?;

    // Initialization can only happen once
    if config_info.owner() == &crate::ID || !config_info.data_is_empty() {
        return Err(YieldFlowError::AlreadyInitialized.into());
    }

    let (config_key, bump) = find_config_address()?;
    if config_info.key() != &config_key {
        return Err(ProgramError::InvalidSeeds);
    }
    let (escrow_authority, escrow_bump) = find_escrow_authority()?;

    Mint::from_account_info(msol_mint_info)?;
    Mint::from_account_info(usdc_mint_info)?;
    if usdc_mint_info.key() == msol_mint_info.key() {
        return Err(YieldFlowError::InvalidUsdcMint.into());
    }

    check_token_account(escrow_info, msol_mint_info.key(), Some(&escrow_authority))
        .map_err(|_| ProgramError::from(YieldFlowError::EscrowAccountMismatch))?;
    check_token_account(fee_account_info, msol_mint_info.key(), None)?;

    let bump_seed = [bump];
    let seeds = [Seed::from(CONFIG_SEED), Seed::from(&bump_seed[..])];
    create_pda_account(admin_info, config_info, ProgramConfig::LEN, &seeds)?;

    let now = Clock::get()?.unix_timestamp;
    let config = ProgramConfig::from_bytes_mut(unsafe { config_info.borrow_mut_data_unchecked() })?;
    config.discriminator = AccountKind::Config as u8;
    config.bump = bump;
    config.escrow_bump = escrow_bump;
    config.set_fees(false, 0);
    config.admin = *admin_info.key();
    config.marinade_program = *marinade_program_info.key();
    config.msol_mint = *msol_mint_info.key();
    config.usdc_mint = *usdc_mint_info.key();
    config.fee_account = *fee_account_info.key();
    config.escrow = *escrow_info.key();
    config.payout_program = [0u8; 32];
    // 1 mSOL = 1 SOL until the first rate update
    config.set_msol_rate(LAMPORTS_PER_SOL, now);

    log!("Program initialized with bump: {}", bump);
    Ok(())
}
