use crate::traits::Serializer;
use notecycle_core::{NotecycleError, NotecycleResult};

/// Pretty-printed JSON for anything serde can handle.
///
/// Encoding failures are internal errors; decoding failures, including an
/// empty or whitespace-only input, are decode errors.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> NotecycleResult<Vec<u8>> {
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| NotecycleError::Internal(e.to_string()))?;
        Ok(json)
    }

    fn deserialize(&self, bytes: &[u8]) -> NotecycleResult<T> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(NotecycleError::Decode("empty document".to_string()));
        }
        let data = serde_json::from_slice(bytes).map_err(|e| NotecycleError::Decode(e.to_string()))?;
        Ok(data)
    }
}
