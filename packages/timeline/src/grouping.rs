//! Author runs: consecutive `m.room.message` events from one sender.
//!
//! Only the immediate neighbours of an event are inspected.

use matryx_entity::RoomEvent;

/// Anything that may be a message from a known sender
pub trait MessageAuthor {
    /// Sender of the event if it is an `m.room.message`
    fn message_sender(&self) -> Option<&str>;
}

impl MessageAuthor for RoomEvent {
    fn message_sender(&self) -> Option<&str> {
        self.is_message().then_some(self.sender.as_str())
    }
}

impl<T: MessageAuthor, E> MessageAuthor for Result<T, E> {
    fn message_sender(&self) -> Option<&str> {
        self.as_ref().ok().and_then(MessageAuthor::message_sender)
    }
}

impl<T: MessageAuthor + ?Sized> MessageAuthor for &T {
    fn message_sender(&self) -> Option<&str> {
        (**self).message_sender()
    }
}

/// Where a message sits inside its author run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPosition {
    pub is_first: bool,
    pub is_last: bool,
}

impl RunPosition {
    pub const STANDALONE: RunPosition = RunPosition { is_first: true, is_last: true };
}

/// True unless the previous event is a message from the same sender
pub fn is_first_by_author<T: MessageAuthor>(events: &[T], index: usize) -> bool {
    match index.checked_sub(1) {
        Some(previous) => !continues_run(events, index, previous),
        None => true,
    }
}

/// True unless the next event is a message from the same sender
pub fn is_last_by_author<T: MessageAuthor>(events: &[T], index: usize) -> bool {
    match index.checked_add(1) {
        Some(next) => !continues_run(events, index, next),
        None => true,
    }
}

pub fn run_position<T: MessageAuthor>(events: &[T], index: usize) -> RunPosition {
    RunPosition {
        is_first: is_first_by_author(events, index),
        is_last: is_last_by_author(events, index),
    }
}

fn continues_run<T: MessageAuthor>(events: &[T], index: usize, neighbour: usize) -> bool {
    let sender = events.get(index).and_then(MessageAuthor::message_sender);
    let other = events.get(neighbour).and_then(MessageAuthor::message_sender);
    matches!((sender, other), (Some(a), Some(b)) if a == b)
}
