use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.encryption` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionContent {
    /// Encryption algorithm, e.g. `m.megolm.v1.aes-sha2`
    pub algorithm: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_period_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_period_msgs: Option<u64>,
}

impl TypedContent for EncryptionContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_ENCRYPTION;
}
