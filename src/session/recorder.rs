//! Session history recording
//!
//! Appends identified frames to the in-memory session history, detects session
//! boundaries (all contacts lifted), and emits each completed session through a
//! [`SessionSink`] as a pretty-printed JSON document.

use crate::session::types::TouchState;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recording or emitting a session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Receives each completed session as it closes.
///
/// `document` is the full session history, pretty-printed: an ordered list of
/// frames, each `{ "touches": [...] }`, terminated by the empty frame that
/// closed the session. Sinks must not assume they are called more than once
/// per session.
pub trait SessionSink {
    fn session_closed(&mut self, document: &[u8]) -> SessionResult<()>;
}

/// Writes each closed session to an [`io::Write`](std::io::Write) target,
/// separated by a trailing newline. Stdout, a log pipe, and an in-memory
/// buffer all work.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SessionSink for WriterSink<W> {
    fn session_closed(&mut self, document: &[u8]) -> SessionResult<()> {
        self.writer.write_all(document)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Writes one `session-{index}.json` file per closed session into an output
/// directory, with ascending session indices.
pub struct JsonDirSink {
    output_dir: PathBuf,
    session_index: usize,
}

impl JsonDirSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), session_index: 0 }
    }

    fn session_path(&self) -> PathBuf {
        self.output_dir.join(format!("session-{}.json", self.session_index))
    }
}

impl SessionSink for JsonDirSink {
    fn session_closed(&mut self, document: &[u8]) -> SessionResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(SessionError::Configuration("Output directory not set".to_string()));
        }
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.session_path();
        std::fs::write(&path, document)?;
        tracing::info!(path = %path.display(), "session document written");

        self.session_index += 1;
        Ok(())
    }
}

/// Discards session documents; for hosts that only render.
#[derive(Debug, Default)]
pub struct NullSink;

impl SessionSink for NullSink {
    fn session_closed(&mut self, _document: &[u8]) -> SessionResult<()> {
        Ok(())
    }
}

/// Ordered session history with boundary handling.
///
/// The history buffer holds at most one completed session's frames, terminated
/// by exactly one empty frame. That empty frame is a tombstone: it is dropped,
/// together with the completed session it closed, the moment the next frame
/// arrives.
pub struct FrameRecorder<S: SessionSink> {
    history: Vec<TouchState>,
    sink: S,
}

impl<S: SessionSink> FrameRecorder<S> {
    pub fn new(sink: S) -> Self {
        Self { history: Vec::new(), sink }
    }

    /// Append one frame to the session history.
    ///
    /// If the previous last entry was a tombstone, the buffer is cleared first
    /// so the new session starts fresh. Appending an empty frame to a session
    /// that recorded at least one frame closes the session: the full history,
    /// terminal empty frame included, is encoded and handed to the sink. A
    /// second consecutive empty frame (double release) replaces the tombstone
    /// without re-emitting.
    ///
    /// An encoding or sink failure aborts the emission; nothing partial is
    /// ever handed downstream.
    pub fn record(&mut self, state: TouchState) -> SessionResult<()> {
        if self.history.last().is_some_and(|last| last.is_empty()) {
            self.history.clear();
        }

        let closes_session = state.is_empty() && !self.history.is_empty();
        tracing::debug!(touches = state.len(), frame = self.history.len(), "frame recorded");
        self.history.push(state);

        if closes_session {
            self.emit()?;
        }
        Ok(())
    }

    /// Frames recorded so far, including any terminal tombstone.
    pub fn history(&self) -> &[TouchState] {
        &self.history
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self) -> SessionResult<()> {
        let document = serde_json::to_vec_pretty(&self.history)?;
        self.sink.session_closed(&document)?;
        tracing::info!(frames = self.history.len(), "session closed");
        Ok(())
    }
}
