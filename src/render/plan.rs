use crate::processing::paths::PathSet;
use crate::session::types::{Point, TouchState};
use serde::{Deserialize, Serialize};

/// One connected polyline through a finger's path, colored by palette index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub id: u32,
    pub color_index: u32,
    pub points: Vec<Point>,
}

/// A small dot at one recorded point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub color_index: u32,
    pub at: Point,
}

/// Everything a renderer needs to draw one tick, in draw order.
///
/// Built from the aggregated path set plus the latest frame. Paths are visited
/// in ascending id order, so color assignment is deterministic across ticks.
/// Single-point paths get no polyline but keep their marker. Highlights are
/// the larger translucent circles at the latest frame's live contacts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    pub polylines: Vec<Polyline>,
    pub markers: Vec<Marker>,
    pub highlights: Vec<Point>,
}

impl DisplayList {
    pub fn build(paths: &PathSet, latest: &TouchState, palette_size: u32) -> Self {
        let palette_size = palette_size.max(1);
        let mut list = DisplayList::default();

        for (&id, path) in paths {
            let color_index = id % palette_size;

            if path.len() >= 2 {
                list.polylines.push(Polyline {
                    id,
                    color_index,
                    points: path.iter().map(|p| p.location).collect(),
                });
            }
            for point in path {
                list.markers.push(Marker { color_index, at: point.location });
            }
        }

        list.highlights = latest.touches.iter().map(|t| t.location).collect();
        list
    }
}

/// Draw target for one tick's display list. Must not mutate session state;
/// the list is a value it can consume freely.
pub trait Renderer {
    fn render(&mut self, list: &DisplayList);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::paths::aggregate_paths;
    use crate::session::types::{TouchPoint, TouchState};

    fn point(id: u32, x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(id, 1.0, Point::new(x, y))
    }

    fn paths_from(frames: &[TouchState]) -> PathSet {
        aggregate_paths(frames)
    }

    #[test]
    fn test_single_point_path_has_marker_but_no_polyline() {
        let paths = paths_from(&[TouchState::new(vec![point(0, 1.0, 1.0)])]);
        let list = DisplayList::build(&paths, &TouchState::empty(), 8);

        assert!(list.polylines.is_empty());
        assert_eq!(list.markers.len(), 1);
    }

    #[test]
    fn test_polyline_connects_path_in_order() {
        let paths = paths_from(&[
            TouchState::new(vec![point(0, 0.0, 0.0)]),
            TouchState::new(vec![point(0, 1.0, 2.0)]),
            TouchState::new(vec![point(0, 3.0, 4.0)]),
        ]);
        let list = DisplayList::build(&paths, &TouchState::empty(), 8);

        assert_eq!(list.polylines.len(), 1);
        let xs: Vec<f64> = list.polylines[0].points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 3.0]);
        assert_eq!(list.markers.len(), 3);
    }

    #[test]
    fn test_color_index_wraps_at_palette_size() {
        let paths = paths_from(&[
            TouchState::new(vec![point(0, 0.0, 0.0), point(9, 5.0, 5.0)]),
            TouchState::new(vec![point(0, 1.0, 1.0), point(9, 6.0, 6.0)]),
        ]);
        let list = DisplayList::build(&paths, &TouchState::empty(), 8);

        assert_eq!(list.polylines[0].color_index, 0);
        assert_eq!(list.polylines[1].color_index, 9 % 8);
    }

    #[test]
    fn test_polylines_ordered_by_ascending_id() {
        let paths = paths_from(&[
            TouchState::new(vec![point(2, 0.0, 0.0), point(0, 1.0, 1.0)]),
            TouchState::new(vec![point(2, 2.0, 2.0), point(0, 3.0, 3.0)]),
        ]);
        let list = DisplayList::build(&paths, &TouchState::empty(), 8);

        let ids: Vec<u32> = list.polylines.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_highlights_come_from_latest_frame_only() {
        let paths = paths_from(&[
            TouchState::new(vec![point(0, 0.0, 0.0)]),
            TouchState::new(vec![point(0, 1.0, 1.0)]),
        ]);
        let latest = TouchState::new(vec![point(0, 1.0, 1.0)]);
        let list = DisplayList::build(&paths, &latest, 8);

        assert_eq!(list.highlights, vec![Point::new(1.0, 1.0)]);
    }
}
