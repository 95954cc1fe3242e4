//! Turns a Matrix room event log into timeline entries.
//!
//! Each raw event becomes exactly one [`RenderInstruction`]: messages become
//! chat bubbles grouped by author, state events become narrated sentences,
//! and anything that cannot be interpreted becomes a placeholder. Nothing
//! here paints, fetches, or stores anything.
//!
//! ```no_run
//! use serde_json::json;
//!
//! let raw = vec![json!({
//!     "type": "m.room.message",
//!     "sender": "@alice:example.org",
//!     "origin_server_ts": 1_600_000_000_000i64,
//!     "content": {"msgtype": "m.text", "body": "hello"},
//! })];
//!
//! for instruction in matryx_timeline::decode_timeline(raw) {
//!     println!("{instruction}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod grouping;
pub mod instruction;
pub mod loader;
pub mod membership;
pub mod narrator;
pub mod render;
pub mod timeline;
pub mod timestamp;

pub use config::{ConfigError, TimeZoneChoice, TimelineConfig};
pub use error::{ImpossibleTransition, NarrationError, NarrationResult};
pub use grouping::{MessageAuthor, RunPosition, is_first_by_author, is_last_by_author, run_position};
pub use instruction::{BubbleBody, ChatBubble, RenderInstruction};
pub use membership::{MembershipChange, narrate_member_event, narrate_membership};
pub use narrator::{EventNarrator, NarratorRegistry};
pub use render::render_message;
pub use timeline::{Instructions, Timeline, decode_timeline};
pub use timestamp::format_timestamp;
