//! Outcome engine
//!
//! Turns signed provider draws into crash and double outcomes, with a
//! deadline on every request, and hands locally drawn games to the drawer.

use crate::config::EngineConfig;
use crate::errors::{FairnessResult, ProviderError};
use crate::games::allocation::LocalDrawer;
use crate::games::payout::{crash_coefficient, double_payout, DOUBLE_MAX_NUMBER};
use crate::games::types::{CrashCoefficient, DiceDraw, DoubleOutcome, MinesAllocation};
use crate::provider::RandomnessProvider;
use std::future::Future;
use tracing::{debug, warn};

/// Crash draws are requested with this many decimal places
const CRASH_DECIMAL_PLACES: u32 = 3;

/// Bridges the randomness provider and the local drawer into game outcomes
pub struct OutcomeEngine<P> {
    provider: P,
    drawer: LocalDrawer,
    config: EngineConfig,
}

impl<P: RandomnessProvider> OutcomeEngine<P> {
    /// Create an engine; the local PRNG uses `config.rng_seed` when set
    pub fn new(provider: P, config: EngineConfig) -> Self {
        let drawer = match config.rng_seed {
            Some(seed) => LocalDrawer::with_seed(seed),
            None => LocalDrawer::from_entropy(),
        };
        Self::with_drawer(provider, drawer, config)
    }

    pub fn with_drawer(provider: P, drawer: LocalDrawer, config: EngineConfig) -> Self {
        Self {
            provider,
            drawer,
            config,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Crash multiplier from one signed decimal draw
    pub async fn generate_crash_coefficient(&self) -> FairnessResult<CrashCoefficient> {
        let draw = self
            .with_deadline(self.provider.fetch_decimal(CRASH_DECIMAL_PLACES))
            .await?;

        if !(0.0..1.0).contains(&draw.value) {
            return Err(ProviderError::UnexpectedValue(format!(
                "decimal draw {} outside [0, 1)",
                draw.value
            ))
            .into());
        }

        let coefficient = CrashCoefficient {
            value: crash_coefficient(draw.value),
            provenance: draw.provenance(),
        };
        debug!(
            value = coefficient.value,
            serial_number = draw.serial_number,
            "generated crash coefficient"
        );
        Ok(coefficient)
    }

    /// Winning double number from one signed integer draw
    pub async fn generate_double_outcome(&self) -> FairnessResult<DoubleOutcome> {
        let draw = self
            .with_deadline(self.provider.fetch_integer(0, i64::from(DOUBLE_MAX_NUMBER)))
            .await?;

        let value = u8::try_from(draw.value)
            .ok()
            .filter(|n| *n <= DOUBLE_MAX_NUMBER)
            .ok_or_else(|| {
                ProviderError::UnexpectedValue(format!(
                    "integer draw {} outside [0, {}]",
                    draw.value, DOUBLE_MAX_NUMBER
                ))
            })?;

        let outcome = DoubleOutcome {
            value,
            multiplier: double_payout(value),
            provenance: draw.provenance(),
        };
        debug!(
            value,
            multiplier = outcome.multiplier,
            serial_number = draw.serial_number,
            "generated double outcome"
        );
        Ok(outcome)
    }

    /// Locally drawn mines layout with its commitment
    pub fn generate_mines_allocation(&self) -> MinesAllocation {
        self.drawer.generate_mines_allocation()
    }

    /// Locally drawn dice value with its commitment
    pub fn generate_dice_draw(&self) -> DiceDraw {
        self.drawer.generate_dice_draw()
    }

    async fn with_deadline<T, F>(&self, request: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let timeout = self.config.request_timeout();
        match tokio::time::timeout(timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!("randomness request failed: {}", e);
                Err(e)
            }
            Err(_) => {
                warn!("randomness request timed out after {:?}", timeout);
                Err(ProviderError::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
        }
    }
}
