use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::{helpers::*, state::ProgramConfig};

/// Hand the admin role to another key. Requires the current admin's signature.
///
/// Accounts:
/// 0. `[writable]` Config PDA
/// 1. `[signer]`   Current admin
/// 2. `[]`         New admin
pub fn process_update_admin(accounts: &[AccountInfo]) -> ProgramResult {
    let [config_info, admin_info, new_admin_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let config = ProgramConfig::get_account_info_mut(config_info)?;
    require_admin(config, admin_info)?;

    config.admin = *new_admin_info.key();
    Ok(())
}
