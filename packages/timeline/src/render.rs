//! `m.room.message` events as chat bubbles.

use crate::config::TimelineConfig;
use crate::grouping::RunPosition;
use crate::instruction::{BubbleBody, ChatBubble, RenderInstruction};
use crate::timestamp::format_timestamp;
use matryx_entity::{MessageContent, RoomEvent};
use tracing::warn;

/// Render a message event as a bubble at `position` in its author run
pub fn render_message(
    event: &RoomEvent,
    position: RunPosition,
    config: &TimelineConfig,
) -> RenderInstruction {
    let (author_label, timestamp_label) = if position.is_first {
        (
            Some(author_label(&event.sender, config.author_label_width)),
            format_timestamp(event.origin_server_ts, config),
        )
    } else {
        (None, None)
    };

    RenderInstruction::ChatBubble(ChatBubble {
        sender: event.sender.clone(),
        author_label,
        timestamp_label,
        body: message_body(event),
        is_first: position.is_first,
        is_last: position.is_last,
    })
}

/// Bubble body for a message event.
///
/// Redaction is checked before the content is decoded; a content that fails
/// to decode yields [`BubbleBody::DecodeFailed`] for this event only.
pub fn message_body(event: &RoomEvent) -> BubbleBody {
    if event.is_redacted() {
        return BubbleBody::Redacted;
    }

    match event.content_as::<MessageContent>() {
        Ok(content) => content_body(content),
        Err(e) => {
            warn!(sender = %event.sender, ts = event.origin_server_ts, "{e}");
            BubbleBody::DecodeFailed
        },
    }
}

pub fn content_body(content: MessageContent) -> BubbleBody {
    match content {
        MessageContent::Text { body } => BubbleBody::Text(body),
        MessageContent::Notice { body } => BubbleBody::Notice(body),
        MessageContent::Emote { body } => BubbleBody::Emote(body),
        MessageContent::Image { body, info, .. } => BubbleBody::Image {
            body,
            aspect_ratio: info.as_ref().and_then(|info| info.aspect_ratio()),
        },
        other @ MessageContent::Other { .. } => {
            BubbleBody::Fallback { kind: other.kind_name().to_string() }
        },
    }
}

/// The first `width` characters of the sender ID
pub fn author_label(sender: &str, width: usize) -> String {
    sender.chars().take(width).collect()
}
