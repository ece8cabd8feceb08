//! Raw touch input capture
//!
//! Data model for host-reported contacts and maintenance of the full
//! active-contact set from begin/move/end/cancel batches. The platform event
//! plumbing itself lives behind the [`TouchSource`] trait and is supplied by
//! the host.

pub mod source;
pub mod types;

pub use source::{ActiveContacts, ScriptedSource, TouchSource};
pub use types::{ContactEvent, ContactPhase, ContactToken, RawContact};
