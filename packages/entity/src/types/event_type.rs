//! Event type tags understood by the timeline.

pub const ROOM_MEMBER: &str = "m.room.member";
pub const ROOM_NAME: &str = "m.room.name";
pub const ROOM_TOPIC: &str = "m.room.topic";
pub const ROOM_AVATAR: &str = "m.room.avatar";
pub const ROOM_CANONICAL_ALIAS: &str = "m.room.canonical_alias";
pub const ROOM_GUEST_ACCESS: &str = "m.room.guest_access";
pub const ROOM_CREATE: &str = "m.room.create";
pub const ROOM_JOIN_RULES: &str = "m.room.join_rules";
pub const ROOM_HISTORY_VISIBILITY: &str = "m.room.history_visibility";
pub const ROOM_ENCRYPTION: &str = "m.room.encryption";
pub const ROOM_MESSAGE: &str = "m.room.message";
