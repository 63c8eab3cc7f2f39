use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use yield_flow::helpers::{CONFIG_SEED, ESCROW_SEED, USER_STAKE_SEED, VAULT_SEED};

use super::program_id;

pub fn token_program_id() -> Pubkey {
    spl_token::id()
}

pub fn config_address() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED], &program_id()).0
}

pub fn escrow_authority() -> Pubkey {
    Pubkey::find_program_address(&[ESCROW_SEED], &program_id()).0
}

pub fn vault_authority() -> Pubkey {
    Pubkey::find_program_address(&[VAULT_SEED], &program_id()).0
}

pub fn user_stake_address(user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[USER_STAKE_SEED, user.as_ref()], &program_id()).0
}

fn build(discriminator: u8, payload: &[u8], accounts: Vec<AccountMeta>) -> Instruction {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(discriminator);
    data.extend_from_slice(payload);
    Instruction {
        program_id: program_id(),
        accounts,
        data,
    }
}

pub fn initialize(
    admin: &Pubkey,
    marinade_program: &Pubkey,
    msol_mint: &Pubkey,
    usdc_mint: &Pubkey,
    escrow: &Pubkey,
    fee_account: &Pubkey,
) -> Instruction {
    build(
        0,
        &[],
        vec![
            AccountMeta::new(config_address(), false),
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(*marinade_program, false),
            AccountMeta::new_readonly(*msol_mint, false),
            AccountMeta::new_readonly(*usdc_mint, false),
            AccountMeta::new_readonly(*escrow, false),
            AccountMeta::new_readonly(*fee_account, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
    )
}

pub fn update_admin(admin: &Pubkey, new_admin: &Pubkey) -> Instruction {
    build(
        1,
        &[],
        vec![
            AccountMeta::new(config_address(), false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*new_admin, false),
        ],
    )
}

pub fn update_config(
    admin: &Pubkey,
    fee_account: &Pubkey,
    payout_program: &Pubkey,
    fees_enabled: bool,
    fee_rate_bps: u16,
) -> Instruction {
    let mut payload = vec![fees_enabled as u8];
    payload.extend_from_slice(&fee_rate_bps.to_le_bytes());
    build(
        2,
        &payload,
        vec![
            AccountMeta::new(config_address(), false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*fee_account, false),
            AccountMeta::new_readonly(*payout_program, false),
        ],
    )
}

pub fn update_rate(admin: &Pubkey, lamports_per_msol: u64) -> Instruction {
    build(
        3,
        &lamports_per_msol.to_le_bytes(),
        vec![
            AccountMeta::new(config_address(), false),
            AccountMeta::new_readonly(*admin, true),
        ],
    )
}

pub fn initialize_user_stake(user: &Pubkey, marinade_program: &Pubkey) -> Instruction {
    build(
        4,
        &[],
        vec![
            AccountMeta::new(user_stake_address(user), false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(config_address(), false),
            AccountMeta::new_readonly(*marinade_program, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
    )
}

pub fn deposit(user: &Pubkey, user_msol: &Pubkey, escrow: &Pubkey, amount: u64) -> Instruction {
    build(
        5,
        &amount.to_le_bytes(),
        vec![
            AccountMeta::new(user_stake_address(user), false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(*user_msol, false),
            AccountMeta::new(*escrow, false),
            AccountMeta::new_readonly(config_address(), false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
    )
}

/// `kind`/`value` use the on-chain tag encoding (see `PayoutSchedule::encode`).
pub fn set_schedule(user: &Pubkey, kind: u8, value: i64, auto_claim: bool, min_amount: u64) -> Instruction {
    let mut payload = vec![kind];
    payload.extend_from_slice(&value.to_le_bytes());
    payload.push(auto_claim as u8);
    payload.extend_from_slice(&min_amount.to_le_bytes());
    build(
        6,
        &payload,
        vec![
            AccountMeta::new(user_stake_address(user), false),
            AccountMeta::new_readonly(*user, true),
        ],
    )
}

pub fn claim_dividend(
    user: &Pubkey,
    escrow: &Pubkey,
    user_msol: &Pubkey,
    fee_account: &Pubkey,
    marinade_program: &Pubkey,
    auto: bool,
) -> Instruction {
    build(
        if auto { 7 } else { 8 },
        &[],
        vec![
            AccountMeta::new(user_stake_address(user), false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new_readonly(config_address(), false),
            AccountMeta::new(*escrow, false),
            AccountMeta::new_readonly(escrow_authority(), false),
            AccountMeta::new(*user_msol, false),
            AccountMeta::new(*fee_account, false),
            AccountMeta::new_readonly(*marinade_program, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
    )
}

pub fn withdraw(user: &Pubkey, escrow: &Pubkey, user_msol: &Pubkey, amount: u64) -> Instruction {
    build(
        9,
        &amount.to_le_bytes(),
        vec![
            AccountMeta::new(user_stake_address(user), false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new_readonly(config_address(), false),
            AccountMeta::new(*escrow, false),
            AccountMeta::new_readonly(escrow_authority(), false),
            AccountMeta::new(*user_msol, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
    )
}

pub fn get_dividend(user: &Pubkey) -> Instruction {
    build(
        10,
        &[],
        vec![
            AccountMeta::new_readonly(user_stake_address(user), false),
            AccountMeta::new_readonly(config_address(), false),
        ],
    )
}

pub fn process_withdrawal(
    admin: &Pubkey,
    vault: &Pubkey,
    destination: &Pubkey,
    payout_program: &Pubkey,
    amount: u64,
) -> Instruction {
    build(
        11,
        &amount.to_le_bytes(),
        vec![
            AccountMeta::new_readonly(config_address(), false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(vault_authority(), false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*payout_program, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
    )
}
