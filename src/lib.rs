//! touchtrace - Multi-touch gesture recording and trajectory reconstruction.
//!
//! Converts a stream of ephemeral per-frame touch reports into a stable
//! integer-id timeline per finger, records the timeline as an in-memory
//! session history, and reconstructs per-finger paths from it for rendering
//! and serialization.
//!
//! The pipeline is event-driven and synchronous: each raw batch from a
//! [`capture::TouchSource`] runs identity assignment, one history append, and
//! (if the host wants it) one render-plan build, all inside the input
//! callback. When every contact lifts, the completed session is emitted
//! through a [`session::SessionSink`] as a pretty-printed JSON document.

pub mod capture;
pub mod processing;
pub mod render;
pub mod session;

pub use capture::{ContactEvent, ContactPhase, ContactToken, RawContact, ScriptedSource, TouchSource};
pub use processing::{aggregate_paths, PathSet};
pub use render::{DisplayList, Renderer};
pub use session::{
    GestureSession, IdentityAssigner, JsonDirSink, NullSink, SessionError, SessionResult,
    SessionSink, TouchPoint, TouchState, WriterSink,
};
