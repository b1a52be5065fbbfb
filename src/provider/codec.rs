use crate::errors::ProviderError;
use serde_json::Value;

/// Serialization strategy used by the provider client.
///
/// Injected at construction so a failing codec can be substituted in tests.
pub trait PayloadCodec: Send + Sync {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, ProviderError>;
    fn decode(&self, bytes: &[u8]) -> Result<Value, ProviderError>;
}

/// Plain JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, ProviderError> {
        serde_json::to_vec(value).map_err(|e| ProviderError::Codec(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, ProviderError> {
        serde_json::from_slice(bytes).map_err(|e| ProviderError::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_codec() {
        let value = json!({"jsonrpc": "2.0", "id": 1337});
        let bytes = JsonCodec.encode(&value).unwrap();
        assert_eq!(JsonCodec.decode(&bytes).unwrap(), value);
    }

    #[test]
    fn test_json_codec_rejects_garbage() {
        assert!(matches!(JsonCodec.decode(b"<html>"), Err(ProviderError::Codec(_))));
    }
}
