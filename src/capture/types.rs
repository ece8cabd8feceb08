use serde::{Deserialize, Serialize};

/// Opaque host-assigned identity for one physical contact.
///
/// The touch host guarantees the token is unique among simultaneously-active
/// contacts and stable from begin to end/cancel. Tokens carry no meaning beyond
/// equality and hashing; they are never shown to downstream consumers, which
/// only ever see the dense session-local ids assigned by the identity map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactToken(pub u64);

/// One raw contact report as delivered by the touch host.
///
/// `timestamp` is the host capture instant in seconds; `x`/`y` are surface
/// coordinates. Valid only while the finger stays on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    pub token: ContactToken,
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
}

impl RawContact {
    pub fn new(token: ContactToken, timestamp: f64, x: f64, y: f64) -> Self {
        Self { token, timestamp, x, y }
    }
}

/// Lifecycle phase of a contact event. End and cancel are handled identically:
/// both remove the contact from the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// One event within a raw input batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    pub phase: ContactPhase,
    pub contact: RawContact,
}

impl ContactEvent {
    pub fn began(contact: RawContact) -> Self {
        Self { phase: ContactPhase::Began, contact }
    }

    pub fn moved(contact: RawContact) -> Self {
        Self { phase: ContactPhase::Moved, contact }
    }

    pub fn ended(contact: RawContact) -> Self {
        Self { phase: ContactPhase::Ended, contact }
    }

    pub fn cancelled(contact: RawContact) -> Self {
        Self { phase: ContactPhase::Cancelled, contact }
    }
}
