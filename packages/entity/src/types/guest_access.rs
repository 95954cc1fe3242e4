use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestAccess {
    CanJoin,
    Forbidden,
}

/// Content of an `m.room.guest_access` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAccessContent {
    pub guest_access: GuestAccess,
}

impl TypedContent for GuestAccessContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_GUEST_ACCESS;
}
