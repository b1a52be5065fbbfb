//! Signed randomness provider
//!
//! The outcome engine only depends on [`RandomnessProvider`]; the random.org
//! JSON-RPC client is one implementation of it.

pub mod codec;
pub mod random_org;
pub mod rpc;

pub use codec::{JsonCodec, PayloadCodec};
pub use random_org::RandomOrgClient;

use crate::errors::ProviderError;
use crate::games::types::RandomDraw;
use async_trait::async_trait;

/// Largest number of decimal places the provider is asked for
pub const MAX_DECIMAL_PLACES: u32 = 8;

/// Source of signed true-random values
#[async_trait]
pub trait RandomnessProvider: Send + Sync {
    /// One decimal fraction in `[0, 1)` with `decimal_places` digits
    async fn fetch_decimal(&self, decimal_places: u32) -> Result<RandomDraw<f64>, ProviderError>;

    /// One integer in `[min, max]`
    async fn fetch_integer(&self, min: i64, max: i64) -> Result<RandomDraw<i64>, ProviderError>;
}

/// Out-of-range precision falls back to the maximum
pub fn clamp_decimal_places(decimal_places: u32) -> u32 {
    if decimal_places == 0 || decimal_places > MAX_DECIMAL_PLACES {
        MAX_DECIMAL_PLACES
    } else {
        decimal_places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_decimal_places() {
        assert_eq!(clamp_decimal_places(0), 8);
        assert_eq!(clamp_decimal_places(1), 1);
        assert_eq!(clamp_decimal_places(3), 3);
        assert_eq!(clamp_decimal_places(8), 8);
        assert_eq!(clamp_decimal_places(10), 8);
    }
}
