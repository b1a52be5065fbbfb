//! Error types for the fairdraw engine
//!
//! Three families: outcome errors surfaced to callers of the engine, errors
//! from the randomness provider, and configuration errors.

use thiserror::Error;

/// Coarse classification of a [`FairnessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local precondition violation; never worth retrying
    InvalidInput,
    /// Canonical string with the wrong field count or an unparsable field
    MalformedCommitment,
    /// The external randomness source failed
    Provider,
}

/// Root error type for outcome generation and verification
#[derive(Debug, Error)]
pub enum FairnessError {
    #[error("wrong mines count: {mines} (expected 2..=24)")]
    InvalidMineCount { mines: u8 },

    #[error("wrong chance: {chance} (expected 1..=90)")]
    InvalidChance { chance: u8 },

    #[error("malformed commitment: {0}")]
    MalformedCommitment(String),

    #[error("random source error: {0}")]
    RandomSource(#[source] ProviderError),
}

impl FairnessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FairnessError::InvalidMineCount { .. } | FairnessError::InvalidChance { .. } => {
                ErrorKind::InvalidInput
            }
            FairnessError::MalformedCommitment(_) => ErrorKind::MalformedCommitment,
            FairnessError::RandomSource(_) => ErrorKind::Provider,
        }
    }
}

impl From<ProviderError> for FairnessError {
    fn from(e: ProviderError) -> Self {
        FairnessError::RandomSource(e)
    }
}

/// Failures talking to the signed randomness provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("payload codec error: {0}")]
    Codec(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Structured error object returned by the provider
    #[error("error {code}: {message}")]
    Api {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("wrong response: no random data")]
    EmptyResponse,

    /// Well-formed response carrying a value outside the requested range
    #[error("unexpected value: {0}")]
    UnexpectedValue(String),

    #[error("request not answered within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type FairnessResult<T> = Result<T, FairnessError>;
