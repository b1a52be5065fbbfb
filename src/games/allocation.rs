//! Locally generated, committed outcomes (mines layout and dice value)
//!
//! These games never ask the external provider for randomness: the outcome is
//! drawn from an engine-local PRNG and only its commitment is published up
//! front.

use crate::commitment;
use crate::errors::{FairnessError, FairnessResult};
use crate::games::payout::{DICE_LENGTH, MINES_TILES};
use crate::games::types::{DiceDraw, MinesAllocation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Characters a seed is drawn from
pub const SEED_ALPHABET: &[u8; 36] = b"1234567890abcdefghijklmnopqrstuvwxyz";
/// Seeds are as long as the alphabet
pub const SEED_LENGTH: usize = SEED_ALPHABET.len();

/// Left seed, 25 places, right seed
const MINES_FIELDS: usize = MINES_TILES as usize + 2;
/// Left seed, value, right seed
const DICE_FIELDS: usize = 3;

/// Engine-local random source for mines and dice.
///
/// The PRNG is shared behind a mutex so one drawer can serve concurrent callers.
pub struct LocalDrawer {
    rng: Mutex<StdRng>,
}

impl LocalDrawer {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic drawer, mainly for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the PRNG half-updated.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shuffle the 25 tiles and commit to the order
    pub fn generate_mines_allocation(&self) -> MinesAllocation {
        let (places, left_seed, right_seed) = {
            let mut rng = self.rng();

            let mut base: Vec<u8> = (1..=MINES_TILES).collect();
            let mut places = Vec::with_capacity(base.len());
            while !base.is_empty() {
                let index = rng.gen_range(0..base.len());
                places.push(base.swap_remove(index));
            }

            let left_seed = random_seed(&mut *rng);
            let right_seed = random_seed(&mut *rng);
            (places, left_seed, right_seed)
        };

        let commitment = commitment::encode(&left_seed, &places, &right_seed);
        tracing::debug!(result_hash = %commitment.digest, "generated mines allocation");

        MinesAllocation {
            places,
            left_seed,
            right_seed,
            result: commitment.canonical,
            result_hash: commitment.digest,
        }
    }

    /// Draw a dice value in `[0, DICE_LENGTH)` and commit to it
    pub fn generate_dice_draw(&self) -> DiceDraw {
        let (value, left_seed, right_seed) = {
            let mut rng = self.rng();
            let left_seed = random_seed(&mut *rng);
            let right_seed = random_seed(&mut *rng);
            (rng.gen_range(0..DICE_LENGTH), left_seed, right_seed)
        };

        let commitment = commitment::encode(&left_seed, &[value], &right_seed);
        tracing::debug!(result_hash = %commitment.digest, "generated dice draw");

        DiceDraw {
            value,
            left_seed,
            right_seed,
            result: commitment.canonical,
            result_hash: commitment.digest,
        }
    }
}

impl Default for LocalDrawer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SEED_LENGTH)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// Rebuild a mines allocation from its canonical string.
///
/// The permutation property is not checked here; see
/// [`MinesAllocation::is_permutation`].
pub fn parse_mines_allocation(result: &str) -> FairnessResult<MinesAllocation> {
    let decoded = commitment::decode(result, MINES_FIELDS)?;

    let places = decoded
        .payload
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field.parse::<u8>().map_err(|e| {
                FairnessError::MalformedCommitment(format!("place {} ('{}'): {}", i + 1, field, e))
            })
        })
        .collect::<FairnessResult<Vec<u8>>>()?;

    Ok(MinesAllocation {
        places,
        left_seed: decoded.left_seed.to_string(),
        right_seed: decoded.right_seed.to_string(),
        result: result.to_string(),
        result_hash: decoded.digest,
    })
}

/// Rebuild a dice draw from its canonical string
pub fn parse_dice_draw(result: &str) -> FairnessResult<DiceDraw> {
    let decoded = commitment::decode(result, DICE_FIELDS)?;

    let field = decoded.payload[0];
    let value = field
        .parse::<u64>()
        .map_err(|e| {
            FairnessError::MalformedCommitment(format!("dice value ('{}'): {}", field, e))
        })?;

    Ok(DiceDraw {
        value,
        left_seed: decoded.left_seed.to_string(),
        right_seed: decoded.right_seed.to_string(),
        result: result.to_string(),
        result_hash: decoded.digest,
    })
}
