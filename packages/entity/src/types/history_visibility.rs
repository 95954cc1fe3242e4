use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Who may read room history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryVisibility {
    Invited,
    Joined,
    Shared,
    WorldReadable,
}

impl HistoryVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryVisibility::Invited => "invited",
            HistoryVisibility::Joined => "joined",
            HistoryVisibility::Shared => "shared",
            HistoryVisibility::WorldReadable => "world_readable",
        }
    }
}

/// Content of an `m.room.history_visibility` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryVisibilityContent {
    pub history_visibility: HistoryVisibility,
}

impl TypedContent for HistoryVisibilityContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_HISTORY_VISIBILITY;
}
