pub mod avatar_content;
pub mod canonical_alias_content;
pub mod create_content;
pub mod encryption_content;
pub mod event_type;
pub mod guest_access;
pub mod history_visibility;
pub mod join_rules;
pub mod member_content;
pub mod membership_state;
pub mod message_content;
pub mod name_content;
pub mod room_event;
pub mod topic_content;
pub mod typed_content;

pub use avatar_content::*;
pub use canonical_alias_content::*;
pub use create_content::*;
pub use encryption_content::*;
pub use guest_access::*;
pub use history_visibility::*;
pub use join_rules::*;
pub use member_content::*;
pub use membership_state::*;
pub use message_content::*;
pub use name_content::*;
pub use room_event::*;
pub use topic_content::*;
pub use typed_content::*;
