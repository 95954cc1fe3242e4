//! Reads a room event log from disk.
//!
//! The log is either one JSON array of events or one JSON object per line.
//! Records are returned untouched; envelope decoding happens in the timeline.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read event log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in event log at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_event_log(path: &Path) -> Result<Vec<Value>, LoadError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let events = parse_event_log(&text)?;
    debug!("Loaded {} raw events from {}", events.len(), path.display());
    Ok(events)
}

pub fn parse_event_log(text: &str) -> Result<Vec<Value>, LoadError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text)
            .map_err(|source| LoadError::Json { line: source.line(), source });
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| LoadError::Json { line: i + 1, source })
        })
        .collect()
}
