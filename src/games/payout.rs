//! Payout math
//!
//! Pure functions turning raw randomness into multipliers. The float
//! operations are kept in the exact order of the published reference tables so
//! the results reproduce bit-for-bit.

use crate::errors::{FairnessError, FairnessResult};
use crate::games::types::MinesPayoutTable;

/// Size of the mines field
pub const MINES_TILES: u8 = 25;
pub const MIN_MINES: u8 = 2;
pub const MAX_MINES: u8 = 24;

/// Dice values are drawn from `[0, DICE_LENGTH)`
pub const DICE_LENGTH: u64 = 1_000_000;
pub const MIN_DICE_CHANCE: u8 = 1;
pub const MAX_DICE_CHANCE: u8 = 90;

/// Highest winning double number
pub const DOUBLE_MAX_NUMBER: u8 = 53;
/// Returned by [`double_payout`] outside the table
pub const NO_PAYOUT: u8 = 0;

/// Fair odds are scaled by this factor (5% house edge)
const HOUSE_FACTOR: f64 = 0.95;

/// Seconds for the crash curve to grow by a factor of e
const CRASH_CURVE_SECONDS: f64 = 12.0;

const DOUBLE_PAYOUTS: [u8; 54] = [
    3, 2, 5, 2, 3, 2, 3, 2, 3, 2, 3, 5, 2, 5, 2, 3, 2, 3, 2, 3, 2, 5, 2, 5,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 5, 2, 5, 2, 3, 2, 3, 2, 3, 2, 5, 2, 5,
    2, 3, 2, 5, 50, 2,
];

/// Map a decimal draw in `[0, 1)` to a crash multiplier.
///
/// Every value whose hundredths band is a multiple of 33 busts instantly at 1.0.
pub fn crash_coefficient(x: f64) -> f64 {
    debug_assert!((0.0..1.0).contains(&x), "crash draw must lie in [0, 1), got {}", x);

    let result = 0.05 + 0.95 / (1.0 - x);
    if (result * 100.0).floor() as i64 % 33 == 0 {
        1.0
    } else {
        (result * 100.0).round() / 100.0
    }
}

/// Multiplier for a winning double number; [`NO_PAYOUT`] above 53.
pub fn double_payout(number: u8) -> u8 {
    DOUBLE_PAYOUTS
        .get(number as usize)
        .copied()
        .unwrap_or(NO_PAYOUT)
}

/// Multipliers for each safe pick with `mines` mines on the field
pub fn mines_payout_table(mines: u8) -> FairnessResult<MinesPayoutTable> {
    if !(MIN_MINES..=MAX_MINES).contains(&mines) {
        return Err(FairnessError::InvalidMineCount { mines });
    }

    let steps = MINES_TILES - mines;
    let mut coefficients = Vec::with_capacity(steps as usize);
    let mut prev_chance = 1.0_f64;

    for step in 1..=steps {
        let free_clear = f64::from(MINES_TILES - mines - step + 1);
        let free_total = f64::from(MINES_TILES - step + 1);

        let chance = free_clear / free_total * prev_chance;
        let coefficient = 1.0 / chance;
        coefficients.push((coefficient * 95.0).round() / 100.0);

        prev_chance = chance;
    }

    Ok(MinesPayoutTable { mines, coefficients })
}

/// Dice multiplier for a winning chance in percent
pub fn dice_coefficient(chance: u8) -> FairnessResult<f64> {
    check_dice_chance(chance)?;
    Ok(1.0 / (f64::from(chance) / 100.0) * HOUSE_FACTOR)
}

/// Width of the winning dice window out of [`DICE_LENGTH`]
pub fn dice_window_length(chance: u8) -> FairnessResult<u64> {
    check_dice_chance(chance)?;
    Ok((DICE_LENGTH as f64 * f64::from(chance) / 100.0) as u64)
}

fn check_dice_chance(chance: u8) -> FairnessResult<()> {
    if (MIN_DICE_CHANCE..=MAX_DICE_CHANCE).contains(&chance) {
        Ok(())
    } else {
        Err(FairnessError::InvalidChance { chance })
    }
}

/// Multiplier the crash curve reaches after `seconds`
pub fn crash_coefficient_from_duration(seconds: f64) -> f64 {
    (seconds / CRASH_CURVE_SECONDS).exp()
}

/// Seconds until the crash curve reaches `coefficient`
pub fn duration_from_crash_coefficient(coefficient: f64) -> f64 {
    debug_assert!(coefficient > 0.0, "crash coefficient must be positive");
    CRASH_CURVE_SECONDS * coefficient.ln()
}
