use crate::commitment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One signed value obtained from the randomness provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RandomDraw<T> {
    pub value: T,
    /// Signed `random` object as returned by the provider, re-serialized
    pub random: String,
    pub signature: String,
    pub serial_number: u64,
}

impl<T> RandomDraw<T> {
    pub fn provenance(&self) -> Provenance {
        Provenance {
            random: self.random.clone(),
            signature: self.signature.clone(),
            serial_number: self.serial_number,
        }
    }
}

/// Verification data carried from a draw into a derived outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provenance {
    pub random: String,
    pub signature: String,
    pub serial_number: u64,
}

/// Crash multiplier derived from a decimal draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrashCoefficient {
    pub value: f64,
    #[serde(flatten)]
    pub provenance: Provenance,
}

impl CrashCoefficient {
    /// Bust before the curve starts
    pub fn is_instant_crash(&self) -> bool {
        self.value == 1.0
    }
}

/// Winning double number and its multiplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoubleOutcome {
    pub value: u8,
    pub multiplier: u8,
    #[serde(flatten)]
    pub provenance: Provenance,
}

/// Committed layout of the mines field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinesAllocation {
    pub places: Vec<u8>,
    pub left_seed: String,
    pub right_seed: String,
    /// Canonical string
    pub result: String,
    /// SHA-512 of `result`
    pub result_hash: String,
}

impl MinesAllocation {
    /// Whether `places` holds every tile 1..=25 exactly once
    pub fn is_permutation(&self) -> bool {
        let unique: HashSet<u8> = self.places.iter().copied().collect();
        self.places.len() == 25 && unique.len() == 25 && unique.iter().all(|p| (1..=25).contains(p))
    }

    pub fn verify(&self, expected_digest: &str) -> bool {
        commitment::verify(&self.result, expected_digest)
    }
}

/// Committed dice value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceDraw {
    pub value: u64,
    pub left_seed: String,
    pub right_seed: String,
    pub result: String,
    pub result_hash: String,
}

impl DiceDraw {
    pub fn verify(&self, expected_digest: &str) -> bool {
        commitment::verify(&self.result, expected_digest)
    }
}

/// Multiplier per safe pick for a fixed number of mines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinesPayoutTable {
    pub mines: u8,
    /// `coefficients[s - 1]` pays out after `s` safe picks
    pub coefficients: Vec<f64>,
}

impl MinesPayoutTable {
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Multiplier after `step` safe picks (1-based)
    pub fn coefficient(&self, step: usize) -> Option<f64> {
        step.checked_sub(1).and_then(|i| self.coefficients.get(i).copied())
    }
}
