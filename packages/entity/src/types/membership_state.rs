use serde::{Deserialize, Serialize};
use std::fmt;

/// Matrix room membership states as defined in the Matrix specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    /// User has knocked on the room (requesting to join)
    Knock,
    /// User has been invited to the room
    Invite,
    /// User has joined the room
    Join,
    /// User has left the room
    Leave,
    /// User has been banned from the room
    Ban,
}

impl MembershipState {
    pub const ALL: [MembershipState; 5] = [
        MembershipState::Knock,
        MembershipState::Invite,
        MembershipState::Join,
        MembershipState::Leave,
        MembershipState::Ban,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipState::Knock => "knock",
            MembershipState::Invite => "invite",
            MembershipState::Join => "join",
            MembershipState::Leave => "leave",
            MembershipState::Ban => "ban",
        }
    }
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
