use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A 2D surface position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One identified touch sample: a dense session-local finger id, the host
/// capture timestamp in seconds, and the surface location.
///
/// Equality and ordering are lexicographic over `(id, x, y)` using total float
/// ordering. The timestamp is deliberately excluded: comparing two samples asks
/// "is this the same finger at the same place", not "at the same time".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub id: u32,
    pub timestamp: f64,
    pub location: Point,
}

impl TouchPoint {
    pub fn new(id: u32, timestamp: f64, location: Point) -> Self {
        Self { id, timestamp, location }
    }
}

impl PartialEq for TouchPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TouchPoint {}

impl Ord for TouchPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.location.x.total_cmp(&other.location.x))
            .then_with(|| self.location.y.total_cmp(&other.location.y))
    }
}

impl PartialOrd for TouchPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One frame: every active contact at a single capture instant.
///
/// The wire shape is fixed: `{ "touches": [ { "id", "timestamp",
/// "location": { "x", "y" } }, ... ] }`. Equality is structural over the full
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchState {
    pub touches: Vec<TouchPoint>,
}

impl TouchState {
    pub fn new(touches: Vec<TouchPoint>) -> Self {
        Self { touches }
    }

    /// A frame with no active contacts; marks a session boundary.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }
}
