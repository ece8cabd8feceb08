//! Renderer collaborator contract
//!
//! The crate never draws pixels. It builds a [`DisplayList`] describing what a
//! renderer would draw for one tick (polylines, point markers, live-contact
//! highlights) and hands it to whatever implements [`Renderer`].

pub mod plan;

pub use plan::{DisplayList, Marker, Polyline, Renderer};
