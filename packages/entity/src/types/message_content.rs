use crate::types::{event_type, TypedContent};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Content of an `m.room.message` event, keyed by `msgtype`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMessageContent")]
pub enum MessageContent {
    /// `m.text`
    Text { body: String },

    /// `m.notice`, sent by bots and rendered with less emphasis
    Notice { body: String },

    /// `m.emote`
    Emote { body: String },

    /// `m.image`
    Image {
        body: String,
        url: Option<String>,
        info: Option<ImageInfo>,
    },

    /// Any other message type, kept by its tag
    Other { msgtype: String, body: String },
}

/// Image information for image messages.
///
/// `w`, `h` and `size` are hints: a value of the wrong shape reads as unknown,
/// so a bad hint never fails the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// The intended display width of the image in pixels
    #[serde(
        rename = "w",
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f64>,

    /// The intended display height of the image in pixels
    #[serde(
        rename = "h",
        default,
        deserialize_with = "lenient_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f64>,

    /// The mimetype of the image, e.g. image/jpeg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,

    /// Size of the image in bytes
    #[serde(default, deserialize_with = "lenient_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(f64::from(width)),
            height: Some(f64::from(height)),
            ..Self::default()
        }
    }

    /// `width / height`, only when both are known and positive
    pub fn aspect_ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some(w / h),
            _ => None,
        }
    }
}

fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

fn lenient_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_u64))
}

impl MessageContent {
    pub fn msgtype(&self) -> &str {
        match self {
            MessageContent::Text { .. } => "m.text",
            MessageContent::Notice { .. } => "m.notice",
            MessageContent::Emote { .. } => "m.emote",
            MessageContent::Image { .. } => "m.image",
            MessageContent::Other { msgtype, .. } => msgtype,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            MessageContent::Text { body }
            | MessageContent::Notice { body }
            | MessageContent::Emote { body }
            | MessageContent::Image { body, .. }
            | MessageContent::Other { body, .. } => body,
        }
    }

    /// Human name of the message kind, e.g. `File` for `m.file`
    pub fn kind_name(&self) -> &str {
        match self.msgtype() {
            "m.text" => "Text",
            "m.notice" => "Notice",
            "m.emote" => "Emote",
            "m.image" => "Image",
            "m.file" => "File",
            "m.audio" => "Audio",
            "m.video" => "Video",
            "m.location" => "Location",
            "m.server_notice" => "ServerNotice",
            "m.key.verification.request" => "VerificationRequest",
            other => other,
        }
    }
}

impl TypedContent for MessageContent {
    const EVENT_TYPE: &'static str = event_type::ROOM_MESSAGE;
}

#[derive(Deserialize)]
struct RawMessageContent {
    msgtype: String,
    body: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    info: Option<Value>,
}

impl TryFrom<RawMessageContent> for MessageContent {
    type Error = serde_json::Error;

    fn try_from(raw: RawMessageContent) -> Result<Self, Self::Error> {
        let RawMessageContent { msgtype, body, url, info } = raw;
        let content = match msgtype.as_str() {
            "m.text" => MessageContent::Text { body },
            "m.notice" => MessageContent::Notice { body },
            "m.emote" => MessageContent::Emote { body },
            "m.image" => {
                let info = info
                    .filter(|v| !v.is_null())
                    .map(|v| ImageInfo::deserialize(&v))
                    .transpose()?;
                MessageContent::Image { body, url, info }
            },
            _ => MessageContent::Other { msgtype, body },
        };
        Ok(content)
    }
}
