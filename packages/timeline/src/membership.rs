//! Narration of `m.room.member` transitions.
//!
//! Every `(previous, next)` membership pair maps to exactly one
//! [`MembershipChange`] or to an [`ImpossibleTransition`]. The table is a
//! single exhaustive `match`, so a new membership state does not build until
//! it is narrated.

use crate::error::{ImpossibleTransition, NarrationResult};
use matryx_entity::{MemberContent, MembershipState, RoomEvent};
use tracing::debug;

/// Target label used when a member event carries no state key
pub const UNKNOWN_USER: &str = "Unknown user";

/// What a membership event did to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipChange {
    Invited,
    Joined,
    Left,
    Kicked,
    Banned,
    Unbanned,
    KickedAndBanned,
    InvitationRejected,
    InvitationRevoked,
    ChangedAvatarAndName,
    ChangedAvatar,
    ChangedName,
    NoChange,
    /// Knock transitions are not narrated yet
    Unsupported,
}

impl MembershipChange {
    /// Sentence tail appended directly after the target's name
    pub fn phrase(&self) -> &'static str {
        match self {
            MembershipChange::Invited => " was invited",
            MembershipChange::Joined => " joined",
            MembershipChange::Left => " left",
            MembershipChange::Kicked => " was kicked",
            MembershipChange::Banned => " was banned",
            MembershipChange::Unbanned => " was unbanned",
            MembershipChange::KickedAndBanned => " was kicked and banned",
            MembershipChange::InvitationRejected => " rejected invite",
            MembershipChange::InvitationRevoked => "'s invitation was revoked",
            MembershipChange::ChangedAvatarAndName => " changed their avatar and display name",
            MembershipChange::ChangedAvatar => " changed their avatar",
            MembershipChange::ChangedName => " changed display name",
            MembershipChange::NoChange => " made no change",
            MembershipChange::Unsupported => {
                " made a knock membership change, which cannot be rendered yet"
            },
        }
    }

    pub fn narrate(&self, target: &str) -> String {
        format!("{target}{}", self.phrase())
    }
}

/// Classify a membership transition.
///
/// `prev` is `None` for a user the room has never seen, which reads the same
/// as `leave`. `name_changed` and `avatar_changed` only matter for
/// `join -> join`.
pub fn narrate_membership(
    prev: Option<MembershipState>,
    next: MembershipState,
    target_is_sender: bool,
    name_changed: bool,
    avatar_changed: bool,
) -> Result<MembershipChange, ImpossibleTransition> {
    use MembershipState::{Ban, Invite, Join, Knock, Leave};

    let change = match (prev, next) {
        (Some(Knock), _) | (_, Knock) => MembershipChange::Unsupported,

        (None | Some(Leave), Invite) => MembershipChange::Invited,
        (None | Some(Leave), Join) => MembershipChange::Joined,
        (None | Some(Leave), Leave) => MembershipChange::NoChange,
        (None | Some(Leave), Ban) => MembershipChange::Banned,

        (Some(Ban), Invite | Join) => return Err(ImpossibleTransition { from: Ban, to: next }),
        (Some(Ban), Leave) => MembershipChange::Unbanned,
        (Some(Ban), Ban) => MembershipChange::NoChange,

        (Some(Join), Invite) => return Err(ImpossibleTransition { from: Join, to: next }),
        (Some(Join), Join) => match (name_changed, avatar_changed) {
            (true, true) => MembershipChange::ChangedAvatarAndName,
            (false, true) => MembershipChange::ChangedAvatar,
            (true, false) => MembershipChange::ChangedName,
            (false, false) => MembershipChange::NoChange,
        },
        (Some(Join), Leave) if target_is_sender => MembershipChange::Left,
        (Some(Join), Leave) => MembershipChange::Kicked,
        (Some(Join), Ban) => MembershipChange::KickedAndBanned,

        (Some(Invite), Invite) => MembershipChange::NoChange,
        (Some(Invite), Join) => MembershipChange::Joined,
        (Some(Invite), Leave) if target_is_sender => MembershipChange::InvitationRejected,
        (Some(Invite), Leave) => MembershipChange::InvitationRevoked,
        (Some(Invite), Ban) => MembershipChange::Banned,
    };

    Ok(change)
}

/// Decode an `m.room.member` event and narrate it relative to its target
pub fn narrate_member_event(event: &RoomEvent) -> NarrationResult<String> {
    let content: MemberContent = event.content_as()?;
    let prior: Option<MemberContent> = event.prior_content_as()?;

    let (name_changed, avatar_changed) = match &prior {
        Some(prior) => (
            prior.display_name != content.display_name,
            prior.avatar_url != content.avatar_url,
        ),
        None => (false, false),
    };

    let change = narrate_membership(
        prior.as_ref().map(|c| c.membership),
        content.membership,
        event.target_is_sender(),
        name_changed,
        avatar_changed,
    )?;

    debug!(
        sender = %event.sender,
        state_key = ?event.state_key,
        ?change,
        "narrated membership change"
    );

    let target = event.state_key.as_deref().unwrap_or(UNKNOWN_USER);
    Ok(change.narrate(target))
}
