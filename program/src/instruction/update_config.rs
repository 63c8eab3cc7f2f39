use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{error::YieldFlowError, helpers::*, state::ProgramConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateConfigArgs {
    pub fees_enabled: bool,
    pub fee_rate_bps: u16,
}

impl UpdateConfigArgs {
    pub const LEN: usize = 3;

    /// `[fees_enabled: u8][fee_rate_bps: u16 LE]`
    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let fees_enabled = match data[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidInstructionData),
        };
        let fee_rate_bps = u16::from_le_bytes([data[1], data[2]]);
        if fee_rate_bps > MAX_BPS {
            return Err(YieldFlowError::InvalidFeeRate.into());
        }
        Ok(Self {
            fees_enabled,
            fee_rate_bps,
        })
    }
}

/// Update fee settings and the fee / payout destinations.
///
/// Accounts:
/// 0. `[writable]` Config PDA
/// 1. `[signer]`   Admin
/// 2. `[]`         Fee mSOL token account
/// 3. `[]`         Payout program
pub fn process_update_config(accounts: &[AccountInfo], args: UpdateConfigArgs) -> ProgramResult {
    let [config_info, admin_info, fee_account_info, payout_program_info, _rest @ ..] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let config = ProgramConfig::get_account_info_mut(config_info)?;
    require_admin(config, admin_info)?;
    check_token_account(fee_account_info, &config.msol_mint, None)?;

    config.set_fees(args.fees_enabled, args.fee_rate_bps);
    config.fee_account = *fee_account_info.key();
    config.payout_program = *payout_program_info.key();

    log!("Fee rate set to {} bps", args.fee_rate_bps);
    Ok(())
}
