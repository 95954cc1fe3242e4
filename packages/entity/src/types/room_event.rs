use crate::error::{DecodeError, DecodeResult};
use crate::types::{event_type, TypedContent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped JSON object carried by an event (content, prev_content)
pub type OpaqueRecord = Map<String, Value>;

/// Room event as it appears in a client timeline.
///
/// Only `type`, `sender` and `origin_server_ts` are required; any other
/// top-level field is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEvent {
    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event sender user ID
    pub sender: String,

    /// State key for state events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_key: Option<String>,

    /// Server timestamp when event was created, in milliseconds
    pub origin_server_ts: i64,

    /// Event content, empty once redacted
    #[serde(default)]
    pub content: OpaqueRecord,

    /// Previous content of a state event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_content: Option<Value>,

    /// Unsigned event metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsigned: Option<Value>,
}

impl RoomEvent {
    pub fn new(
        event_type: impl Into<String>,
        sender: impl Into<String>,
        origin_server_ts: i64,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            sender: sender.into(),
            state_key: None,
            origin_server_ts,
            content: OpaqueRecord::new(),
            prev_content: None,
            unsigned: None,
        }
    }

    /// Decode an event envelope from a raw JSON record
    pub fn from_value(value: Value) -> DecodeResult<Self> {
        serde_json::from_value(value).map_err(DecodeError::Envelope)
    }

    pub fn is_message(&self) -> bool {
        self.event_type == event_type::ROOM_MESSAGE
    }

    /// Redacted events keep their envelope but lose every content key
    pub fn is_redacted(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the user the state event is about also sent it
    pub fn target_is_sender(&self) -> bool {
        self.state_key.as_deref() == Some(self.sender.as_str())
    }

    pub fn origin_server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.origin_server_ts)
    }

    /// Decode the content payload as the typed content `C`
    pub fn content_as<C: TypedContent>(&self) -> DecodeResult<C> {
        C::decode(&self.content)
    }

    /// Prior state content: `prev_content`, else `unsigned.prev_content`.
    ///
    /// A JSON `null` in either place counts as absent.
    pub fn prior_content(&self) -> Option<&Value> {
        self.prev_content
            .as_ref()
            .filter(|v| !v.is_null())
            .or_else(|| {
                self.unsigned
                    .as_ref()
                    .and_then(|u| u.get("prev_content"))
                    .filter(|v| !v.is_null())
            })
    }

    /// Decode the prior state content as the typed content `C`
    pub fn prior_content_as<C: TypedContent>(&self) -> DecodeResult<Option<C>> {
        self.prior_content().map(C::decode_value).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemberContent, MembershipState};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_envelope() {
        let event = RoomEvent::from_value(json!({
            "type": "m.room.message",
            "sender": "@alice:example.org",
            "origin_server_ts": 1_600_000_000_000i64,
            "event_id": "$ignored",
            "room_id": "!ignored:example.org",
        }))
        .unwrap();

        assert_eq!(event.event_type, "m.room.message");
        assert_eq!(event.sender, "@alice:example.org");
        assert!(event.is_message());
        assert!(event.is_redacted());
        assert_eq!(event.state_key, None);
    }

    #[test]
    fn test_missing_required_fields_fail() {
        for missing in ["type", "sender", "origin_server_ts"] {
            let mut raw = json!({
                "type": "m.room.topic",
                "sender": "@alice:example.org",
                "origin_server_ts": 1,
                "content": {"topic": "hi"},
            });
            raw.as_object_mut().unwrap().remove(missing);

            let err = RoomEvent::from_value(raw).unwrap_err();
            assert!(matches!(err, DecodeError::Envelope(_)), "missing {missing}");
            assert_eq!(err.event_type(), None);
        }
    }

    #[test]
    fn test_prior_content_prefers_top_level() {
        let event = RoomEvent::from_value(json!({
            "type": "m.room.member",
            "sender": "@bob:example.org",
            "state_key": "@bob:example.org",
            "origin_server_ts": 1,
            "content": {"membership": "leave"},
            "prev_content": {"membership": "join"},
            "unsigned": {"prev_content": {"membership": "invite"}},
        }))
        .unwrap();

        let prior: Option<MemberContent> = event.prior_content_as().unwrap();
        assert_eq!(prior.map(|c| c.membership), Some(MembershipState::Join));
        assert!(event.target_is_sender());
    }

    #[test]
    fn test_prior_content_falls_back_to_unsigned() {
        let event = RoomEvent::from_value(json!({
            "type": "m.room.member",
            "sender": "@mod:example.org",
            "state_key": "@bob:example.org",
            "origin_server_ts": 1,
            "content": {"membership": "ban"},
            "prev_content": null,
            "unsigned": {"age": 12, "prev_content": {"membership": "invite"}},
        }))
        .unwrap();

        let prior: Option<MemberContent> = event.prior_content_as().unwrap();
        assert_eq!(prior.map(|c| c.membership), Some(MembershipState::Invite));
        assert!(!event.target_is_sender());
    }

    #[test]
    fn test_prior_content_absent() {
        let event = RoomEvent::from_value(json!({
            "type": "m.room.member",
            "sender": "@bob:example.org",
            "state_key": "@bob:example.org",
            "origin_server_ts": 1,
            "content": {"membership": "join"},
            "unsigned": {"age": 12},
        }))
        .unwrap();

        assert!(event.prior_content().is_none());
        let prior: Option<MemberContent> = event.prior_content_as().unwrap();
        assert!(prior.is_none());
    }

    #[test]
    fn test_origin_server_time() {
        let event = RoomEvent::new("m.room.message", "@alice:example.org", 1_000);
        assert_eq!(event.origin_server_time().map(|t| t.timestamp()), Some(1));
    }
}
