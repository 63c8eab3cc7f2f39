use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod update_admin;
pub use update_admin::*;

pub mod update_config;
pub use update_config::*;

pub mod update_rate;
pub use update_rate::*;

pub mod initialize_user_stake;
pub use initialize_user_stake::*;

pub mod deposit;
pub use deposit::*;

pub mod set_schedule;
pub use set_schedule::*;

pub mod claim;
pub use claim::*;

pub mod withdraw;
pub use withdraw::*;

pub mod get_dividend;
pub use get_dividend::*;

pub mod process_withdrawal;
pub use process_withdrawal::*;

/// Instruction discriminators (first byte of instruction data).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum YieldFlowInstruction {
    #[account(0, writable, name = "config", desc = "Config PDA, created here")]
    #[account(1, writable, signer, name = "admin", desc = "Administrator and rent payer")]
    #[account(2, name = "marinade_program", desc = "Marinade program")]
    #[account(3, name = "msol_mint", desc = "mSOL mint")]
    #[account(4, name = "usdc_mint", desc = "USDC mint")]
    #[account(5, name = "escrow", desc = "mSOL token account owned by the escrow PDA")]
    #[account(6, name = "fee_account", desc = "mSOL token account receiving fees")]
    #[account(7, name = "system_program", desc = "System program")]
    Initialize,

    #[account(0, writable, name = "config", desc = "Config PDA")]
    #[account(1, signer, name = "admin", desc = "Current administrator")]
    #[account(2, name = "new_admin", desc = "New administrator")]
    UpdateAdmin,

    #[account(0, writable, name = "config", desc = "Config PDA")]
    #[account(1, signer, name = "admin", desc = "Administrator")]
    #[account(2, name = "fee_account", desc = "mSOL token account receiving fees")]
    #[account(3, name = "payout_program", desc = "External payout program")]
    UpdateConfig,

    #[account(0, writable, name = "config", desc = "Config PDA")]
    #[account(1, signer, name = "admin", desc = "Administrator")]
    UpdateRate,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, writable, signer, name = "user", desc = "Owner and rent payer")]
    #[account(2, name = "config", desc = "Config PDA")]
    #[account(3, name = "marinade_program", desc = "Marinade program")]
    #[account(4, name = "system_program", desc = "System program")]
    InitializeUserStake,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, signer, name = "user", desc = "Owner")]
    #[account(2, writable, name = "user_msol", desc = "User mSOL token account")]
    #[account(3, writable, name = "escrow", desc = "Escrow mSOL token account")]
    #[account(4, name = "config", desc = "Config PDA")]
    #[account(5, name = "token_program", desc = "SPL Token program")]
    Deposit,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, signer, name = "user", desc = "Owner")]
    SetSchedule,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, signer, name = "user", desc = "Owner")]
    #[account(2, name = "config", desc = "Config PDA")]
    #[account(3, writable, name = "escrow", desc = "Escrow mSOL token account")]
    #[account(4, name = "escrow_authority", desc = "Escrow authority PDA")]
    #[account(5, writable, name = "user_msol", desc = "User mSOL token account")]
    #[account(6, writable, name = "fee_account", desc = "Fee mSOL token account")]
    #[account(7, name = "marinade_program", desc = "Marinade program")]
    #[account(8, name = "token_program", desc = "SPL Token program")]
    ClaimDividendAuto,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, signer, name = "user", desc = "Owner")]
    #[account(2, name = "config", desc = "Config PDA")]
    #[account(3, writable, name = "escrow", desc = "Escrow mSOL token account")]
    #[account(4, name = "escrow_authority", desc = "Escrow authority PDA")]
    #[account(5, writable, name = "user_msol", desc = "User mSOL token account")]
    #[account(6, writable, name = "fee_account", desc = "Fee mSOL token account")]
    #[account(7, name = "marinade_program", desc = "Marinade program")]
    #[account(8, name = "token_program", desc = "SPL Token program")]
    ClaimDividendManual,

    #[account(0, writable, name = "user_stake", desc = "User stake PDA")]
    #[account(1, signer, name = "user", desc = "Owner")]
    #[account(2, name = "config", desc = "Config PDA")]
    #[account(3, writable, name = "escrow", desc = "Escrow mSOL token account")]
    #[account(4, name = "escrow_authority", desc = "Escrow authority PDA")]
    #[account(5, writable, name = "user_msol", desc = "User mSOL token account")]
    #[account(6, name = "token_program", desc = "SPL Token program")]
    Withdraw,

    #[account(0, name = "user_stake", desc = "User stake PDA")]
    #[account(1, name = "config", desc = "Config PDA")]
    GetDividend,

    #[account(0, name = "config", desc = "Config PDA")]
    #[account(1, signer, name = "admin", desc = "Administrator")]
    #[account(2, writable, name = "vault", desc = "mSOL token account owned by the vault PDA")]
    #[account(3, name = "vault_authority", desc = "Vault authority PDA")]
    #[account(4, writable, name = "destination", desc = "mSOL token account receiving the payout")]
    #[account(5, name = "payout_program", desc = "Payout program, must match the config")]
    #[account(6, name = "token_program", desc = "SPL Token program")]
    ProcessWithdrawal,
}

impl TryFrom<&u8> for YieldFlowInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(YieldFlowInstruction::Initialize),
            1 => Ok(YieldFlowInstruction::UpdateAdmin),
            2 => Ok(YieldFlowInstruction::UpdateConfig),
            3 => Ok(YieldFlowInstruction::UpdateRate),
            4 => Ok(YieldFlowInstruction::InitializeUserStake),
            5 => Ok(YieldFlowInstruction::Deposit),
            6 => Ok(YieldFlowInstruction::SetSchedule),
            7 => Ok(YieldFlowInstruction::ClaimDividendAuto),
            8 => Ok(YieldFlowInstruction::ClaimDividendManual),
            9 => Ok(YieldFlowInstruction::Withdraw),
            10 => Ok(YieldFlowInstruction::GetDividend),
            11 => Ok(YieldFlowInstruction::ProcessWithdrawal),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
