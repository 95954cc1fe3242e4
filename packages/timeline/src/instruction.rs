//! Render instructions handed to the presentation layer.

use std::fmt;

/// One displayable timeline entry, produced for every input event
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// A narrated state change
    PlainText(String),

    /// A message, grouped with its neighbours by author
    ChatBubble(ChatBubble),

    /// An event type with no registered narrator
    Unsupported { event_type: String },

    /// An envelope or content payload that did not decode
    DecodeFailed { event_type: Option<String>, reason: String },

    /// A state change that contradicts the room authorization rules
    Inconsistent { event_type: String, reason: String },
}

impl RenderInstruction {
    pub fn as_bubble(&self) -> Option<&ChatBubble> {
        match self {
            RenderInstruction::ChatBubble(bubble) => Some(bubble),
            _ => None,
        }
    }

    /// Whether this entry is a placeholder standing in for a failure
    pub fn is_placeholder(&self) -> bool {
        match self {
            RenderInstruction::PlainText(_) => false,
            RenderInstruction::ChatBubble(bubble) => bubble.body.is_failure(),
            RenderInstruction::Unsupported { .. }
            | RenderInstruction::DecodeFailed { .. }
            | RenderInstruction::Inconsistent { .. } => true,
        }
    }
}

impl fmt::Display for RenderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderInstruction::PlainText(text) => f.write_str(text),
            RenderInstruction::ChatBubble(bubble) => write!(f, "{}", bubble.body),
            RenderInstruction::Unsupported { event_type } => {
                write!(f, "Cannot render '{event_type}' yet")
            },
            RenderInstruction::DecodeFailed { event_type: Some(event_type), reason } => {
                write!(f, "Failed to decode '{event_type}' event: {reason}")
            },
            RenderInstruction::DecodeFailed { event_type: None, reason } => {
                write!(f, "Failed to decode event: {reason}")
            },
            RenderInstruction::Inconsistent { event_type, reason } => {
                write!(f, "Cannot render '{event_type}': {reason}")
            },
        }
    }
}

/// A message bubble. Header labels are only set on the first bubble of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatBubble {
    pub sender: String,
    pub author_label: Option<String>,
    pub timestamp_label: Option<String>,
    pub body: BubbleBody,
    pub is_first: bool,
    pub is_last: bool,
}

/// Message body, mirroring the message content variants
#[derive(Debug, Clone, PartialEq)]
pub enum BubbleBody {
    Text(String),
    Notice(String),
    Emote(String),
    Image {
        body: String,
        /// `width / height`; `None` leaves the size unconstrained
        aspect_ratio: Option<f64>,
    },
    /// A message type without a dedicated renderer, named by `kind`
    Fallback { kind: String },
    Redacted,
    DecodeFailed,
}

impl BubbleBody {
    /// Styling hint: render with reduced emphasis
    pub fn is_reduced_emphasis(&self) -> bool {
        matches!(self, BubbleBody::Notice(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BubbleBody::DecodeFailed)
    }
}

impl fmt::Display for BubbleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BubbleBody::Text(body) | BubbleBody::Notice(body) | BubbleBody::Emote(body) => {
                f.write_str(body)
            },
            BubbleBody::Image { body, aspect_ratio: Some(ratio) } => {
                write!(f, "[image {ratio:.2}:1] {body}")
            },
            BubbleBody::Image { body, aspect_ratio: None } => write!(f, "[image] {body}"),
            BubbleBody::Fallback { kind } => write!(f, "This is a {kind} message"),
            BubbleBody::Redacted => f.write_str("**This message was redacted**"),
            BubbleBody::DecodeFailed => f.write_str("**Failed to decode message**"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_text() {
        let unsupported =
            RenderInstruction::Unsupported { event_type: "m.room.custom.widget".into() };
        assert_eq!(unsupported.to_string(), "Cannot render 'm.room.custom.widget' yet");
        assert!(unsupported.is_placeholder());

        let envelope = RenderInstruction::DecodeFailed { event_type: None, reason: "bad".into() };
        assert_eq!(envelope.to_string(), "Failed to decode event: bad");

        assert!(!RenderInstruction::PlainText("@a joined".into()).is_placeholder());
    }

    #[test]
    fn test_bubble_body_text() {
        assert_eq!(BubbleBody::Redacted.to_string(), "**This message was redacted**");
        assert_eq!(
            BubbleBody::Fallback { kind: "File".into() }.to_string(),
            "This is a File message"
        );
        assert_eq!(
            BubbleBody::Image { body: "cat.png".into(), aspect_ratio: Some(16.0 / 9.0) }
                .to_string(),
            "[image 1.78:1] cat.png"
        );
        assert!(BubbleBody::Notice("beep".into()).is_reduced_emphasis());
        assert!(!BubbleBody::Text("hi".into()).is_reduced_emphasis());
    }
}
