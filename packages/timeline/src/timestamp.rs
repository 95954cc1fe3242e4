use crate::config::{TimeZoneChoice, TimelineConfig};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Format a server timestamp for a bubble header.
///
/// Returns `None` for timestamps chrono cannot represent or when the
/// configured pattern fails to render.
pub fn format_timestamp(epoch_millis: i64, config: &TimelineConfig) -> Option<String> {
    let utc = DateTime::<Utc>::from_timestamp_millis(epoch_millis)?;
    let pattern = config.timestamp_format.as_str();

    let mut label = String::new();
    let written = match config.timezone {
        TimeZoneChoice::Utc => write!(label, "{}", utc.format(pattern)),
        TimeZoneChoice::Local => write!(label, "{}", utc.with_timezone(&Local).format(pattern)),
    };
    written.ok().map(|_| label)
}
