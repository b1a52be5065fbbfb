pub mod allocation;
pub mod engine;
pub mod payout;
pub mod types;

pub use allocation::{parse_dice_draw, parse_mines_allocation, LocalDrawer};
pub use engine::OutcomeEngine;
pub use types::*;
