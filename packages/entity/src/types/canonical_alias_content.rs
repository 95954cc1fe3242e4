use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

/// Content of an `m.room.canonical_alias` event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanonicalAliasContent {
    /// Canonical alias, absent when it was removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Alternative aliases the room advertises
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alt_aliases: Vec<String>,
}

impl TypedContent for CanonicalAliasContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_CANONICAL_ALIAS;
}
