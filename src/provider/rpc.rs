//! JSON-RPC 2.0 wire types for the signed random.org API

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: u64 = 1337;

pub const SIGNED_DECIMALS_METHOD: &str = "generateSignedDecimalFractions";
pub const SIGNED_INTEGERS_METHOD: &str = "generateSignedIntegers";

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
    pub id: u64,
}

impl<P> RpcRequest<P> {
    pub fn new(method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalParams {
    pub api_key: String,
    pub n: u32,
    pub decimal_places: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerParams {
    pub api_key: String,
    pub n: u32,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<RpcResult>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResult {
    /// Signed object; kept verbatim so it can be handed out for verification
    pub random: Value,
    pub signature: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Fields of the signed `random` object the engine reads
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomData<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub serial_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_request_shape() {
        let request = RpcRequest::new(
            SIGNED_DECIMALS_METHOD,
            DecimalParams {
                api_key: "key".to_string(),
                n: 1,
                decimal_places: 3,
            },
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "generateSignedDecimalFractions",
                "params": {"apiKey": "key", "n": 1, "decimalPlaces": 3},
                "id": 1337
            })
        );
    }

    #[test]
    fn test_error_response() {
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": 400,
                "message": "Parameter 'apiKey' is malformed",
                "data": ["apiKey"]
            },
            "id": 1337
        }))
        .unwrap();

        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, 400);
        assert_eq!(error.data, Some(json!(["apiKey"])));
    }

    #[test]
    fn test_random_data_fields() {
        let random: RandomData<i64> =
            serde_json::from_value(json!({"method": "generateSignedIntegers", "serialNumber": 3}))
                .unwrap();
        assert!(random.data.is_empty());
        assert_eq!(random.serial_number, 3);

        let random: RandomData<f64> =
            serde_json::from_value(json!({"data": [0.123], "serialNumber": 42})).unwrap();
        assert_eq!(random.data, vec![0.123]);
        assert_eq!(random.serial_number, 42);
    }

    #[test]
    fn test_unsigned_result_is_rejected() {
        let result = serde_json::from_value::<RpcResult>(json!({"random": {"data": [1]}}));
        assert!(result.is_err());

        let random = serde_json::from_value::<RandomData<i64>>(json!({"data": [1]}));
        assert!(random.is_err());
    }
}
