use crate::types::{event_type, MembershipState, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.member` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberContent {
    /// Membership state
    pub membership: MembershipState,

    /// Display name
    #[serde(rename = "displayname", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl MemberContent {
    pub fn new(membership: MembershipState) -> Self {
        Self { membership, display_name: None, avatar_url: None }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

impl TypedContent for MemberContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_MEMBER;
}
