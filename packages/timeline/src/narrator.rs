//! Sentences for state events, dispatched by event type.
//!
//! [`NarratorRegistry::default`] knows every room state type the timeline
//! renders. Further types can be registered without touching the dispatch.

use crate::error::NarrationResult;
use crate::membership::narrate_member_event;
use matryx_entity::{
    AvatarContent, CanonicalAliasContent, CreateContent, EncryptionContent, GuestAccess,
    GuestAccessContent, HistoryVisibility, HistoryVisibilityContent, JoinRules, JoinRulesContent,
    NameContent, RoomEvent, TopicContent, event_type,
};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Builds the sentence for one kind of state event
pub trait EventNarrator: Send + Sync {
    fn narrate(&self, event: &RoomEvent) -> NarrationResult<String>;
}

impl<F> EventNarrator for F
where
    F: Fn(&RoomEvent) -> NarrationResult<String> + Send + Sync,
{
    fn narrate(&self, event: &RoomEvent) -> NarrationResult<String> {
        self(event)
    }
}

/// Event type tag to narrator
pub struct NarratorRegistry {
    narrators: HashMap<String, Box<dyn EventNarrator>>,
}

impl NarratorRegistry {
    /// A registry that narrates nothing
    pub fn empty() -> Self {
        Self { narrators: HashMap::new() }
    }

    /// Register `narrator` for `event_type`, replacing any previous one
    pub fn register<N>(&mut self, event_type: impl Into<String>, narrator: N) -> &mut Self
    where
        N: EventNarrator + 'static,
    {
        self.narrators.insert(event_type.into(), Box::new(narrator));
        self
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.narrators.contains_key(event_type)
    }

    /// `None` when no narrator handles the event's type
    pub fn narrate(&self, event: &RoomEvent) -> Option<NarrationResult<String>> {
        let narrator = self.narrators.get(&event.event_type)?;
        debug!(event_type = %event.event_type, sender = %event.sender, "narrating state event");
        Some(narrator.narrate(event))
    }
}

impl Default for NarratorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(event_type::ROOM_MEMBER, narrate_member_event)
            .register(event_type::ROOM_NAME, narrate_name)
            .register(event_type::ROOM_TOPIC, narrate_topic)
            .register(event_type::ROOM_AVATAR, narrate_avatar)
            .register(event_type::ROOM_CANONICAL_ALIAS, narrate_canonical_alias)
            .register(event_type::ROOM_GUEST_ACCESS, narrate_guest_access)
            .register(event_type::ROOM_CREATE, narrate_create)
            .register(event_type::ROOM_JOIN_RULES, narrate_join_rules)
            .register(event_type::ROOM_HISTORY_VISIBILITY, narrate_history_visibility)
            .register(event_type::ROOM_ENCRYPTION, narrate_encryption);
        registry
    }
}

impl fmt::Debug for NarratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.narrators.keys().map(String::as_str).collect();
        types.sort_unstable();
        f.debug_struct("NarratorRegistry").field("event_types", &types).finish()
    }
}

pub fn narrate_name(event: &RoomEvent) -> NarrationResult<String> {
    let content: NameContent = event.content_as()?;
    Ok(format!("{} updated the room name to '{}'.", event.sender, content.name))
}

pub fn narrate_topic(event: &RoomEvent) -> NarrationResult<String> {
    let content: TopicContent = event.content_as()?;
    Ok(format!("{} updated the topic to '{}'.", event.sender, content.topic))
}

pub fn narrate_avatar(event: &RoomEvent) -> NarrationResult<String> {
    let content: AvatarContent = event.content_as()?;
    Ok(match content.url {
        Some(_) => format!("{} updated the room avatar.", event.sender),
        None => format!("{} removed the room avatar.", event.sender),
    })
}

pub fn narrate_canonical_alias(event: &RoomEvent) -> NarrationResult<String> {
    let content: CanonicalAliasContent = event.content_as()?;
    Ok(match content.alias {
        Some(alias) => format!("{} set the room's canonical alias to '{}'.", event.sender, alias),
        None => format!("{} removed the room's canonical alias.", event.sender),
    })
}

pub fn narrate_guest_access(event: &RoomEvent) -> NarrationResult<String> {
    let content: GuestAccessContent = event.content_as()?;
    let action = match content.guest_access {
        GuestAccess::CanJoin => "has allowed guests to join the room",
        GuestAccess::Forbidden => "disabled guest access",
    };
    Ok(format!("{} {}.", event.sender, action))
}

pub fn narrate_create(event: &RoomEvent) -> NarrationResult<String> {
    let content: CreateContent = event.content_as()?;
    let creator = content.creator.as_deref().unwrap_or(&event.sender);
    let mut text = format!("{creator} created this room");
    if let Some(predecessor) = &content.predecessor {
        text.push_str(&format!(" to replace room '{}'", predecessor.room_id));
    }
    Ok(text)
}

pub fn narrate_join_rules(event: &RoomEvent) -> NarrationResult<String> {
    let content: JoinRulesContent = event.content_as()?;
    let action = match content.join_rule {
        JoinRules::Public => "has allowed anyone to join the room".to_string(),
        JoinRules::Private => {
            "has allowed anyone to join the room if they know the roomId".to_string()
        },
        JoinRules::Invite => "made the room invite only".to_string(),
        rule @ (JoinRules::Knock | JoinRules::Restricted | JoinRules::KnockRestricted) => {
            format!("has set the join rule to '{}'", rule.as_str().to_uppercase())
        },
    };
    Ok(format!("{} {}.", event.sender, action))
}

pub fn narrate_history_visibility(event: &RoomEvent) -> NarrationResult<String> {
    let content: HistoryVisibilityContent = event.content_as()?;
    let action = match content.history_visibility {
        HistoryVisibility::Shared => {
            "made future room history visible to all room members".to_string()
        },
        visibility @ (HistoryVisibility::Invited
        | HistoryVisibility::Joined
        | HistoryVisibility::WorldReadable) => {
            format!("has set history visibility to '{}'", visibility.as_str().to_uppercase())
        },
    };
    Ok(format!("{} {}.", event.sender, action))
}

pub fn narrate_encryption(event: &RoomEvent) -> NarrationResult<String> {
    let _content: EncryptionContent = event.content_as()?;
    Ok(format!("{} has enabled End to End Encryption.", event.sender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NarrationError;
    use serde_json::{Value, json};

    fn event(event_type: &str, content: Value) -> RoomEvent {
        RoomEvent::from_value(json!({
            "type": event_type,
            "sender": "@alice:hs",
            "state_key": "",
            "origin_server_ts": 1,
            "content": content,
        }))
        .unwrap()
    }

    fn narrate(event_type: &str, content: Value) -> String {
        NarratorRegistry::default()
            .narrate(&event(event_type, content))
            .expect("registered")
            .expect("narrated")
    }

    #[test]
    fn test_room_metadata_sentences() {
        assert_eq!(
            narrate("m.room.name", json!({"name": "Rustaceans"})),
            "@alice:hs updated the room name to 'Rustaceans'."
        );
        assert_eq!(
            narrate("m.room.topic", json!({"topic": "crabs"})),
            "@alice:hs updated the topic to 'crabs'."
        );
        assert_eq!(
            narrate("m.room.avatar", json!({"url": "mxc://hs/a"})),
            "@alice:hs updated the room avatar."
        );
        assert_eq!(narrate("m.room.avatar", json!({})), "@alice:hs removed the room avatar.");
        assert_eq!(
            narrate("m.room.canonical_alias", json!({"alias": "#rust:hs"})),
            "@alice:hs set the room's canonical alias to '#rust:hs'."
        );
        assert_eq!(
            narrate("m.room.canonical_alias", json!({})),
            "@alice:hs removed the room's canonical alias."
        );
        assert_eq!(
            narrate("m.room.encryption", json!({"algorithm": "m.megolm.v1.aes-sha2"})),
            "@alice:hs has enabled End to End Encryption."
        );
    }

    #[test]
    fn test_guest_access_sentences() {
        assert_eq!(
            narrate("m.room.guest_access", json!({"guest_access": "can_join"})),
            "@alice:hs has allowed guests to join the room."
        );
        assert_eq!(
            narrate("m.room.guest_access", json!({"guest_access": "forbidden"})),
            "@alice:hs disabled guest access."
        );
    }

    #[test]
    fn test_create_sentences() {
        assert_eq!(
            narrate("m.room.create", json!({"creator": "@bob:hs", "room_version": "6"})),
            "@bob:hs created this room"
        );
        assert_eq!(
            narrate(
                "m.room.create",
                json!({"predecessor": {"room_id": "!old:hs", "event_id": "$tomb"}})
            ),
            "@alice:hs created this room to replace room '!old:hs'"
        );
    }

    #[test]
    fn test_join_rule_sentences() {
        let cases = [
            ("public", "@alice:hs has allowed anyone to join the room."),
            ("private", "@alice:hs has allowed anyone to join the room if they know the roomId."),
            ("invite", "@alice:hs made the room invite only."),
            ("knock", "@alice:hs has set the join rule to 'KNOCK'."),
            ("knock_restricted", "@alice:hs has set the join rule to 'KNOCK_RESTRICTED'."),
        ];
        for (rule, expected) in cases {
            assert_eq!(narrate("m.room.join_rules", json!({"join_rule": rule})), expected);
        }
    }

    #[test]
    fn test_history_visibility_sentences() {
        let cases = [
            ("shared", "@alice:hs made future room history visible to all room members."),
            ("invited", "@alice:hs has set history visibility to 'INVITED'."),
            ("joined", "@alice:hs has set history visibility to 'JOINED'."),
            ("world_readable", "@alice:hs has set history visibility to 'WORLD_READABLE'."),
        ];
        for (visibility, expected) in cases {
            assert_eq!(
                narrate("m.room.history_visibility", json!({"history_visibility": visibility})),
                expected
            );
        }
    }

    #[test]
    fn test_unknown_type_is_unregistered() {
        let registry = NarratorRegistry::default();
        assert!(registry.narrate(&event("m.room.custom.widget", json!({"x": 1}))).is_none());
        assert!(!registry.contains("m.room.message"));
    }

    #[test]
    fn test_malformed_content_is_decode_error() {
        let result = NarratorRegistry::default()
            .narrate(&event("m.room.guest_access", json!({"guest_access": "sometimes"})))
            .unwrap();
        assert!(matches!(result, Err(NarrationError::Decode(_))));

        let result = NarratorRegistry::default()
            .narrate(&event("m.room.name", json!({})))
            .unwrap();
        assert!(matches!(result, Err(NarrationError::Decode(_))));
    }

    #[test]
    fn test_register_custom_narrator() {
        let mut registry = NarratorRegistry::empty();
        registry.register("m.room.custom.widget", |event: &RoomEvent| -> NarrationResult<String> {
            Ok(format!("{} added a widget.", event.sender))
        });

        let text = registry.narrate(&event("m.room.custom.widget", json!({}))).unwrap().unwrap();
        assert_eq!(text, "@alice:hs added a widget.");
        assert!(registry.narrate(&event("m.room.topic", json!({"topic": "t"}))).is_none());
    }
}
