use thiserror::Error;

/// Errors raised while decoding a room event or its content
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The top-level envelope is malformed or misses a required field
    #[error("Malformed event envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The content payload does not match the schema of its event type
    #[error("Malformed '{event_type}' content: {source}")]
    Content {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn content(event_type: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Content { event_type: event_type.into(), source }
    }

    /// Event type the failure is scoped to, when the envelope got that far
    pub fn event_type(&self) -> Option<&str> {
        match self {
            Self::Envelope(_) => None,
            Self::Content { event_type, .. } => Some(event_type),
        }
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
