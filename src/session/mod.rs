//! Gesture recording core
//!
//! Stable finger-id assignment, session history recording with boundary
//! detection, and the coordinator that runs the pipeline for each raw batch.

pub mod coordinator;
pub mod identity;
pub mod recorder;
pub mod types;

pub use coordinator::{shared, GestureSession, SharedGestureSession};
pub use identity::IdentityAssigner;
pub use recorder::{
    FrameRecorder, JsonDirSink, NullSink, SessionError, SessionResult, SessionSink, WriterSink,
};
pub use types::{Point, TouchPoint, TouchState};
