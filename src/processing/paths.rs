//! Per-finger path reconstruction
//!
//! Rebuilds one polyline per finger id from the recorded session history.
//! This is a pure pass over the history, recomputed on demand (typically once
//! per render tick); the contact cardinality is small, so recomputation is
//! cheaper than keeping incremental state correct across session boundaries.

use crate::session::types::{TouchPoint, TouchState};
use std::collections::BTreeMap;

/// Per-finger paths keyed by id, ascending. Within each path, points appear in
/// history order (ascending frame index), not sorted by timestamp or location.
pub type PathSet = BTreeMap<u32, Vec<TouchPoint>>;

/// Group every touch point in `history` by finger id.
///
/// Flattens the frames in order and appends each point to its id's path, so
/// the path order is exactly the order the finger's samples were recorded.
/// Pure; calling it twice on the same history yields equal results.
pub fn aggregate_paths(history: &[TouchState]) -> PathSet {
    let mut paths = PathSet::new();
    for state in history {
        for touch in &state.touches {
            paths.entry(touch.id).or_default().push(*touch);
        }
    }
    paths
}
