//! Which messages a participant may read.
//!
//! Two modes exist and are kept apart on purpose:
//!
//! * [`visible_to`] returns every message addressed to the room, to the
//!   viewer, or written by the viewer, whatever its kind.
//! * [`latest_broadcasts_visible_to`] applies the same rule, keeps only
//!   `message` (broadcast chat) kinds, and returns the most recent `limit`
//!   of them in chronological order. Polling clients use it for "latest N".

use super::{Message, MessageKind, ParticipantName};

/// Whether `viewer` may read `message`.
pub fn is_visible(message: &Message, viewer: &ParticipantName) -> bool {
    message.to.is_everyone() || message.to.is(viewer) || message.is_authored_by(viewer)
}

/// Messages `viewer` may read, oldest first.
pub fn visible_to<'a, I>(viewer: &ParticipantName, messages: I) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Message>,
{
    messages
        .into_iter()
        .filter(|m| is_visible(m, viewer))
        .cloned()
        .collect()
}

/// The last `limit` broadcast-chat messages `viewer` may read, oldest first.
pub fn latest_broadcasts_visible_to<'a, I>(
    viewer: &ParticipantName,
    messages: I,
    limit: usize,
) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Message>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut latest: Vec<Message> = messages
        .into_iter()
        .rev()
        .filter(|m| m.kind == MessageKind::BroadcastChat && is_visible(m, viewer))
        .take(limit)
        .cloned()
        .collect();
    latest.reverse();
    latest
}
