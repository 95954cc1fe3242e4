use crate::error::{DecodeError, DecodeResult};
use crate::types::OpaqueRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Content payload bound to a single event type.
///
/// Implementors get decoding from an opaque record for free; failures are
/// tagged with [`TypedContent::EVENT_TYPE`] so callers can scope them to the
/// offending event.
pub trait TypedContent: DeserializeOwned {
    /// The `type` tag of events carrying this content
    const EVENT_TYPE: &'static str;

    fn decode(record: &OpaqueRecord) -> DecodeResult<Self> {
        serde_json::from_value(Value::Object(record.clone()))
            .map_err(|e| DecodeError::content(Self::EVENT_TYPE, e))
    }

    fn decode_value(value: &Value) -> DecodeResult<Self> {
        Self::deserialize(value).map_err(|e| DecodeError::content(Self::EVENT_TYPE, e))
    }
}
