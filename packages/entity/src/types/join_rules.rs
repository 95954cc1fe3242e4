use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinRules {
    Public,
    Invite,
    Knock,
    Restricted,
    KnockRestricted,
    Private,
}

impl JoinRules {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinRules::Public => "public",
            JoinRules::Invite => "invite",
            JoinRules::Knock => "knock",
            JoinRules::Restricted => "restricted",
            JoinRules::KnockRestricted => "knock_restricted",
            JoinRules::Private => "private",
        }
    }
}

/// Content of an `m.room.join_rules` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRulesContent {
    pub join_rule: JoinRules,
}

impl TypedContent for JoinRulesContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_JOIN_RULES;
}
