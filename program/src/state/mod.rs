pub mod config;          // ProgramConfig
pub mod user_stake;      // UserStake
pub mod schedule;        // PayoutSchedule, ClaimMode

// Re-export the types so everyone can `use crate::state::{...}`.
pub use config::ProgramConfig;
pub use schedule::{ClaimMode, PayoutSchedule};
pub use user_stake::UserStake;

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized = 0,
    Config = 1,
    UserStake = 2,
}
