use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.create` event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateContent {
    /// Room creator; newer room versions drop it in favour of the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Room version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_version: Option<String>,

    /// Room this one replaces after an upgrade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<PreviousRoom>,
}

/// Reference to the room an upgraded room replaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousRoom {
    pub room_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl TypedContent for CreateContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_CREATE;
}
