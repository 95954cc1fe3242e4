use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.avatar` event. A missing `url` removes the avatar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvatarContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TypedContent for AvatarContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_AVATAR;
}
