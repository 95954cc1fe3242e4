use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.topic` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicContent {
    pub topic: String,
}

impl TypedContent for TopicContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_TOPIC;
}
