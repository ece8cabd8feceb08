//! Derived-data computation over recorded sessions
//!
//! Pure transformations from session history to renderable structures.

pub mod paths;

pub use paths::{aggregate_paths, PathSet};
