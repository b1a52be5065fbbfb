//! fairdraw - provably fair outcome engine
//!
//! Turns signed true-random draws into crash and double outcomes, generates
//! committed mines layouts and dice values, and computes the payout tables for
//! all four games. Every locally generated result is bound to a SHA-512
//! commitment that can be published before the round and checked after it.

pub mod commitment;
pub mod config;
pub mod errors;
pub mod games;
pub mod provider;

pub use config::{ConfigLoader, EngineConfig, FairdrawConfig, ProviderConfig};
pub use errors::{ConfigError, ErrorKind, FairnessError, FairnessResult, ProviderError};
pub use games::payout::{
    crash_coefficient, crash_coefficient_from_duration, dice_coefficient, dice_window_length,
    double_payout, duration_from_crash_coefficient, mines_payout_table,
};
pub use games::{
    parse_dice_draw, parse_mines_allocation, CrashCoefficient, DiceDraw, DoubleOutcome,
    LocalDrawer, MinesAllocation, MinesPayoutTable, OutcomeEngine, Provenance, RandomDraw,
};
pub use provider::{RandomOrgClient, RandomnessProvider};
