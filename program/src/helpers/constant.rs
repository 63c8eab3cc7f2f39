pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// 100% in basis points.
pub const MAX_BPS: u16 = 10_000;

pub const SECONDS_PER_DAY: i64 = 86_400;
/// Monthly schedules use a fixed 30 day month.
pub const DAYS_PER_MONTH: i64 = 30;

pub const CONFIG_SEED: &[u8] = b"config";
pub const USER_STAKE_SEED: &[u8] = b"user-stake";
pub const ESCROW_SEED: &[u8] = b"escrow";
/// Authority of the program vault token accounts paid out by `ProcessWithdrawal`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Return data of `GetDividend`: dividend (u64 LE) followed by the due flag.
pub const DIVIDEND_VIEW_LEN: usize = 9;
