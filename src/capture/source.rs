use crate::capture::types::{ContactEvent, ContactPhase, ContactToken, RawContact};
use std::collections::VecDeque;

/// Maintains the full set of currently-active contacts across raw input batches.
///
/// Each batch is the delta reported by the touch host (begins, moves, ends,
/// cancels); applying it yields the complete active set that identity
/// assignment requires. Moves or releases for tokens that were never reported
/// as began are dropped here, so they can never reach the identity map and
/// trigger an allocation.
#[derive(Debug, Default)]
pub struct ActiveContacts {
    contacts: Vec<RawContact>,
}

impl ActiveContacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw batch and return the resulting full active set.
    ///
    /// Insertion order is preserved: a contact keeps its slot across moves, and
    /// new contacts append at the end. That keeps identity assignment's
    /// first-seen ordering aligned with the order fingers went down.
    pub fn apply_batch(&mut self, events: &[ContactEvent]) -> &[RawContact] {
        for event in events {
            match event.phase {
                ContactPhase::Began => self.begin(event.contact),
                ContactPhase::Moved => self.update(event.contact),
                ContactPhase::Ended | ContactPhase::Cancelled => self.remove(event.contact.token),
            }
        }
        &self.contacts
    }

    pub fn contacts(&self) -> &[RawContact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    fn begin(&mut self, contact: RawContact) {
        match self.position(contact.token) {
            // A begin for a token already down is a host glitch; treat it as a move.
            Some(i) => self.contacts[i] = contact,
            None => self.contacts.push(contact),
        }
    }

    fn update(&mut self, contact: RawContact) {
        match self.position(contact.token) {
            Some(i) => self.contacts[i] = contact,
            None => {
                tracing::warn!(token = contact.token.0, "move for unknown contact ignored");
            }
        }
    }

    fn remove(&mut self, token: ContactToken) {
        match self.position(token) {
            Some(i) => {
                self.contacts.remove(i);
            }
            None => {
                tracing::warn!(token = token.0, "release for unknown contact ignored");
            }
        }
    }

    fn position(&self, token: ContactToken) -> Option<usize> {
        self.contacts.iter().position(|c| c.token == token)
    }
}

/// A source of raw touch-event batches.
///
/// The platform plumbing behind this trait is out of scope for the crate; any
/// host event loop that can produce begin/move/end/cancel batches can feed a
/// [`GestureSession`](crate::session::GestureSession) through it.
pub trait TouchSource {
    /// Next raw batch, or `None` when the source is exhausted.
    fn next_batch(&mut self) -> Option<Vec<ContactEvent>>;
}

/// Replays a pre-built list of batches. Used by the demo binary and tests in
/// place of live touch hardware.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    batches: VecDeque<Vec<ContactEvent>>,
}

impl ScriptedSource {
    pub fn new(batches: Vec<Vec<ContactEvent>>) -> Self {
        Self { batches: batches.into() }
    }
}

impl TouchSource for ScriptedSource {
    fn next_batch(&mut self) -> Option<Vec<ContactEvent>> {
        self.batches.pop_front()
    }
}
