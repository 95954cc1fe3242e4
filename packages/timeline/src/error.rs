use matryx_entity::{DecodeError, MembershipState};
use thiserror::Error;

/// Why a state event could not be narrated
#[derive(Debug, Error)]
pub enum NarrationError {
    /// The event content does not decode for its type
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The membership transition violates the room authorization rules
    #[error(transparent)]
    ImpossibleTransition(#[from] ImpossibleTransition),
}

/// A membership transition that a valid event log never contains.
///
/// Only `ban` and `join` have forbidden successors, so `from` is never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("membership cannot change from '{from}' to '{to}'")]
pub struct ImpossibleTransition {
    pub from: MembershipState,
    pub to: MembershipState,
}

pub type NarrationResult<T> = std::result::Result<T, NarrationError>;
