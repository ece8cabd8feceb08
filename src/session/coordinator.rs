//! Gesture session coordination
//!
//! Wires the pipeline together: each raw batch updates the active set, runs
//! identity assignment, appends the frame to the session history, and then
//! invokes the render callback. The whole sequence runs synchronously inside
//! the input callback, so the identity map and history buffer are never
//! mutated concurrently.

use crate::capture::source::ActiveContacts;
use crate::capture::types::ContactEvent;
use crate::processing::paths::{aggregate_paths, PathSet};
use crate::render::plan::DisplayList;
use crate::session::identity::IdentityAssigner;
use crate::session::recorder::{FrameRecorder, SessionResult, SessionSink};
use crate::session::types::TouchState;
use parking_lot::Mutex;
use std::sync::Arc;

/// Single owner of one gesture-recording pipeline.
///
/// All state (active set, identity map, history) lives here; a multi-threaded
/// host must serialize access, see [`SharedGestureSession`].
pub struct GestureSession<S: SessionSink> {
    active: ActiveContacts,
    assigner: IdentityAssigner,
    recorder: FrameRecorder<S>,
    palette_size: u32,
    latest: TouchState,
}

impl<S: SessionSink> GestureSession<S> {
    pub fn new(sink: S, palette_size: u32) -> Self {
        Self {
            active: ActiveContacts::new(),
            assigner: IdentityAssigner::new(),
            recorder: FrameRecorder::new(sink),
            palette_size,
            latest: TouchState::empty(),
        }
    }

    /// Process one raw batch: active set → identity assignment → history.
    ///
    /// Returns the recorded frame. Errors surface only from session-closed
    /// emission; the in-memory pipeline itself is total.
    pub fn handle_batch(&mut self, events: &[ContactEvent]) -> SessionResult<TouchState> {
        let contacts = self.active.apply_batch(events);
        let state = self.assigner.assign(contacts);
        self.latest = state.clone();
        self.recorder.record(state.clone())?;
        Ok(state)
    }

    /// The most recently recorded frame.
    pub fn latest_frame(&self) -> &TouchState {
        &self.latest
    }

    /// Per-finger paths reconstructed from the current history.
    ///
    /// Recomputed on every call; the expected contact cardinality is small
    /// enough that recomputation beats incremental bookkeeping.
    pub fn paths(&self) -> PathSet {
        aggregate_paths(self.recorder.history())
    }

    /// Build the draw plan for the current history and latest frame.
    pub fn display_list(&self) -> DisplayList {
        DisplayList::build(&self.paths(), &self.latest, self.palette_size)
    }

    pub fn history(&self) -> &[TouchState] {
        self.recorder.history()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.recorder.sink_mut()
    }
}

/// A `GestureSession` behind a mutex, for hosts that deliver input callbacks
/// and render ticks on different threads. Locking serializes the entire
/// assign → record → render sequence, which the history invariants require.
pub type SharedGestureSession<S> = Arc<Mutex<GestureSession<S>>>;

/// Wrap a session for shared ownership across threads.
pub fn shared<S: SessionSink>(session: GestureSession<S>) -> SharedGestureSession<S> {
    Arc::new(Mutex::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::types::{ContactEvent, ContactToken, RawContact};
    use crate::session::recorder::NullSink;

    fn contact(token: u64, t: f64, x: f64, y: f64) -> RawContact {
        RawContact::new(ContactToken(token), t, x, y)
    }

    #[test]
    fn test_two_finger_gesture_end_to_end() {
        let mut session = GestureSession::new(NullSink, 8);

        session
            .handle_batch(&[ContactEvent::began(contact(100, 1.0, 0.0, 0.0))])
            .unwrap();
        session
            .handle_batch(&[
                ContactEvent::moved(contact(100, 2.0, 1.0, 1.0)),
                ContactEvent::began(contact(200, 2.0, 5.0, 5.0)),
            ])
            .unwrap();
        session
            .handle_batch(&[ContactEvent::moved(contact(200, 3.0, 6.0, 6.0))])
            .unwrap();

        let paths = session.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[&0].len(), 3);
        assert_eq!(paths[&1].len(), 2);

        // Finger 0's path follows history order.
        let xs: Vec<f64> = paths[&0].iter().map(|p| p.location.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_release_all_restarts_ids() {
        let mut session = GestureSession::new(NullSink, 8);

        session
            .handle_batch(&[ContactEvent::began(contact(100, 1.0, 0.0, 0.0))])
            .unwrap();
        session
            .handle_batch(&[ContactEvent::ended(contact(100, 2.0, 0.0, 0.0))])
            .unwrap();
        let state = session
            .handle_batch(&[ContactEvent::began(contact(300, 3.0, 4.0, 4.0))])
            .unwrap();

        assert_eq!(state.touches[0].id, 0);
        // Tombstone was dropped; only the new session's frame remains.
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_latest_frame_tracks_last_batch() {
        let mut session = GestureSession::new(NullSink, 8);

        session
            .handle_batch(&[ContactEvent::began(contact(100, 1.0, 2.0, 3.0))])
            .unwrap();
        assert_eq!(session.latest_frame().len(), 1);
        assert_eq!(session.latest_frame().touches[0].location.y, 3.0);
    }

    #[test]
    fn test_shared_session_serializes_access() {
        let session = shared(GestureSession::new(NullSink, 8));

        let handle = {
            let session = session.clone();
            std::thread::spawn(move || {
                session
                    .lock()
                    .handle_batch(&[ContactEvent::began(contact(1, 1.0, 0.0, 0.0))])
                    .unwrap();
            })
        };
        handle.join().unwrap();

        assert_eq!(session.lock().history().len(), 1);
    }
}
