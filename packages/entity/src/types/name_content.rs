use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.name` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameContent {
    pub name: String,
}

impl TypedContent for NameContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_NAME;
}
