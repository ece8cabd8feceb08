//! Stable finger-id assignment
//!
//! The touch host identifies contacts only by opaque tokens with no ordering
//! or density guarantees. This module maps them to small dense ids that stay
//! stable for the life of each contact and restart at 0 every session.

use crate::capture::types::{ContactToken, RawContact};
use crate::session::types::{Point, TouchPoint, TouchState};
use std::collections::HashMap;

/// Maps opaque contact tokens to dense session-local ids.
///
/// Allocation policy: the first contact of a session gets id 0; every later
/// new contact gets `max(assigned so far) + 1`. Ids vacated mid-session (one
/// finger lifts while others stay down) are never reassigned — gaps are not
/// filled, so ids grow monotonically until the session ends. The map is
/// cleared exactly when a frame has zero active contacts, which restarts
/// numbering at 0 for the next session.
#[derive(Debug, Default)]
pub struct IdentityAssigner {
    ids: HashMap<ContactToken, u32>,
}

impl IdentityAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce one identified frame from the full current active set.
    ///
    /// Known tokens reuse their id; unknown tokens allocate in iteration
    /// order. An empty active set clears the map after producing the (empty)
    /// frame, so the clear lands on the session boundary itself.
    pub fn assign(&mut self, active: &[RawContact]) -> TouchState {
        let touches = active
            .iter()
            .map(|contact| {
                let id = self.id_for(contact.token);
                TouchPoint::new(id, contact.timestamp, Point::new(contact.x, contact.y))
            })
            .collect();

        if active.is_empty() {
            self.ids.clear();
        }

        TouchState::new(touches)
    }

    fn id_for(&mut self, token: ContactToken) -> u32 {
        if let Some(&id) = self.ids.get(&token) {
            return id;
        }

        let id = self.ids.values().max().map_or(0, |max| max + 1);
        self.ids.insert(token, id);
        tracing::debug!(token = token.0, id, "new contact assigned id");
        id
    }

    /// Number of contacts currently holding an id.
    pub fn active_count(&self) -> usize {
        self.ids.len()
    }
}
