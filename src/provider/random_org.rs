//! HTTP client for the random.org signed JSON-RPC API

use crate::config::ProviderConfig;
use crate::errors::ProviderError;
use crate::games::types::RandomDraw;
use crate::provider::codec::{JsonCodec, PayloadCodec};
use crate::provider::rpc::{
    DecimalParams, IntegerParams, RandomData, RpcRequest, RpcResponse, SIGNED_DECIMALS_METHOD,
    SIGNED_INTEGERS_METHOD,
};
use crate::provider::{clamp_decimal_places, RandomnessProvider};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// random.org client with an injectable payload codec
pub struct RandomOrgClient {
    http: reqwest::Client,
    config: ProviderConfig,
    codec: Arc<dyn PayloadCodec>,
}

impl RandomOrgClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_codec(config, Arc::new(JsonCodec))
    }

    pub fn with_codec(config: ProviderConfig, codec: Arc<dyn PayloadCodec>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            codec,
        }
    }

    async fn call<P, T>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<RandomDraw<T>, ProviderError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let http_method = reqwest::Method::from_bytes(self.config.method.as_bytes()).map_err(|e| {
            ProviderError::InvalidRequest(format!("HTTP method '{}': {}", self.config.method, e))
        })?;

        let request = serde_json::to_value(RpcRequest::new(method, params))
            .map_err(|e| ProviderError::Codec(e.to_string()))?;
        let body = self.codec.encode(&request)?;

        debug!(method, url = %self.config.url, "sending randomness request");
        let response = self
            .http
            .request(http_method, &self.config.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            warn!(method, %status, "randomness provider answered with a non-success status");
        }

        let response: RpcResponse = serde_json::from_value(self.codec.decode(&bytes)?)
            .map_err(|e| ProviderError::Codec(e.to_string()))?;

        if let Some(error) = response.error {
            warn!(
                method,
                code = error.code,
                message = %error.message,
                "randomness provider returned an error"
            );
            return Err(ProviderError::Api {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        let result = response.result.ok_or(ProviderError::EmptyResponse)?;
        let random: RandomData<T> = serde_json::from_value(result.random.clone())
            .map_err(|e| ProviderError::Codec(e.to_string()))?;
        let raw = self.codec.encode(&result.random)?;
        let raw = String::from_utf8(raw).map_err(|e| ProviderError::Codec(e.to_string()))?;

        let value = random.data.into_iter().next().ok_or(ProviderError::EmptyResponse)?;

        debug!(method, serial_number = random.serial_number, "received signed random value");
        Ok(RandomDraw {
            value,
            random: raw,
            signature: result.signature,
            serial_number: random.serial_number,
        })
    }
}

#[async_trait]
impl RandomnessProvider for RandomOrgClient {
    async fn fetch_decimal(&self, decimal_places: u32) -> Result<RandomDraw<f64>, ProviderError> {
        let params = DecimalParams {
            api_key: self.config.api_key.clone(),
            n: 1,
            decimal_places: clamp_decimal_places(decimal_places),
        };
        self.call(SIGNED_DECIMALS_METHOD, params).await
    }

    async fn fetch_integer(&self, min: i64, max: i64) -> Result<RandomDraw<i64>, ProviderError> {
        let params = IntegerParams {
            api_key: self.config.api_key.clone(),
            n: 1,
            min,
            max,
        };
        self.call(SIGNED_INTEGERS_METHOD, params).await
    }
}
