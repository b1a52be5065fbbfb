//! Configuration management for fairdraw
//!
//! Defaults, TOML file loading, environment variable overrides and
//! validation. Provider settings are passed explicitly to the client and engine
//! constructors; nothing here is process-global.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PROVIDER_URL: &str = "https://api.random.org/json-rpc/4/invoke";

/// Complete fairdraw configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FairdrawConfig {
    pub provider: ProviderConfig,
    pub engine: EngineConfig,
}

/// Signed randomness provider endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub url: String,
    /// HTTP method used for the JSON-RPC call
    pub method: String,
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROVIDER_URL.to_string(),
            method: "POST".to_string(),
            api_key: String::new(),
        }
    }
}

// Keep the API key out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

/// Outcome engine settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound for one provider round trip
    pub request_timeout_ms: u64,
    /// Fixed seed for the local PRNG; OS entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Configuration loader with environment variable support
#[derive(Default)]
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> Result<FairdrawConfig, ConfigError> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with a custom variable lookup
    pub fn load_with<F>(&self, lookup: F) -> Result<FairdrawConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config_path {
            Some(ref path) => self.load_from_file(path)?,
            None => FairdrawConfig::default(),
        };

        self.apply_overrides(&mut config, lookup)?;
        self.validate(&config)?;

        tracing::debug!(
            provider = ?config.provider,
            engine = ?config.engine,
            "configuration loaded"
        );
        Ok(config)
    }

    fn load_from_file(&self, path: &str) -> Result<FairdrawConfig, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read {}: {}", path, e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to parse TOML: {}", e)))
    }

    fn apply_overrides<F>(&self, config: &mut FairdrawConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("FAIRDRAW_API_KEY") {
            config.provider.api_key = key;
        }
        if let Some(url) = lookup("FAIRDRAW_PROVIDER_URL") {
            config.provider.url = url;
        }
        if let Some(method) = lookup("FAIRDRAW_PROVIDER_METHOD") {
            config.provider.method = method;
        }

        if let Some(timeout) = lookup("FAIRDRAW_REQUEST_TIMEOUT_MS") {
            config.engine.request_timeout_ms =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "FAIRDRAW_REQUEST_TIMEOUT_MS".to_string(),
                    value: timeout,
                    reason: "Invalid timeout value".to_string(),
                })?;
        }
        if let Some(seed) = lookup("FAIRDRAW_RNG_SEED") {
            config.engine.rng_seed = Some(seed.parse().map_err(|_| ConfigError::InvalidValue {
                field: "FAIRDRAW_RNG_SEED".to_string(),
                value: seed,
                reason: "Seed must be an unsigned 64-bit integer".to_string(),
            })?);
        }

        Ok(())
    }

    fn validate(&self, config: &FairdrawConfig) -> Result<(), ConfigError> {
        if config.provider.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "provider.url".to_string(),
                value: config.provider.url.clone(),
                reason: "Provider URL cannot be empty".to_string(),
            });
        }

        if reqwest::Method::from_bytes(config.provider.method.as_bytes()).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "provider.method".to_string(),
                value: config.provider.method.clone(),
                reason: "Not a valid HTTP method".to_string(),
            });
        }

        if config.engine.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.request_timeout_ms".to_string(),
                value: "0".to_string(),
                reason: "Request timeout cannot be zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::new().load_with(lookup(&[])).unwrap();
        assert_eq!(config.provider.url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.provider.method, "POST");
        assert_eq!(config.engine.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.engine.rng_seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigLoader::new()
            .load_with(lookup(&[
                ("FAIRDRAW_API_KEY", "secret"),
                ("FAIRDRAW_PROVIDER_URL", "http://127.0.0.1:9/rpc"),
                ("FAIRDRAW_REQUEST_TIMEOUT_MS", "250"),
                ("FAIRDRAW_RNG_SEED", "99"),
            ]))
            .unwrap();

        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.provider.url, "http://127.0.0.1:9/rpc");
        assert_eq!(config.engine.request_timeout_ms, 250);
        assert_eq!(config.engine.rng_seed, Some(99));
    }

    #[test]
    fn test_invalid_overrides() {
        let err = ConfigLoader::new()
            .load_with(lookup(&[("FAIRDRAW_REQUEST_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "FAIRDRAW_REQUEST_TIMEOUT_MS"
        ));

        let err = ConfigLoader::new()
            .load_with(lookup(&[("FAIRDRAW_REQUEST_TIMEOUT_MS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("engine.request_timeout_ms"));

        let err = ConfigLoader::new()
            .load_with(lookup(&[("FAIRDRAW_PROVIDER_METHOD", "вронг")]))
            .unwrap_err();
        assert!(err.to_string().contains("provider.method"));
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[provider]\napi_key = \"from-file\"\n\n[engine]\nrequest_timeout_ms = 1500\nrng_seed = 5"
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_path(file.path())
            .load_with(lookup(&[("FAIRDRAW_API_KEY", "from-env")]))
            .unwrap();

        assert_eq!(config.provider.api_key, "from-env");
        assert_eq!(config.provider.url, DEFAULT_PROVIDER_URL);
        assert_eq!(config.engine.request_timeout_ms, 1500);
        assert_eq!(config.engine.rng_seed, Some(5));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new()
            .with_path("/nonexistent/fairdraw.toml")
            .load_with(lookup(&[]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig {
            api_key: "super-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
