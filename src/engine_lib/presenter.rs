// src/engine_lib/presenter.rs

use crate::engine_lib::scene_types::MarkerHandle;
use crate::geometry::Point2;

/// Rendering side of the editor. It mirrors state the controller has already
/// decided on and is never asked for geometry.
pub trait Presenter {
    fn add_marker(&mut self, position: Point2) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
    fn set_marker_position(&mut self, handle: MarkerHandle, position: Point2);
    /// Replaces the whole outline.
    fn draw_edges(&mut self, edges: &[(Point2, Point2)]);
    /// Replaces the filled area; an empty slice clears it.
    fn fill_polygon(&mut self, ordered_points: &[Point2]);
}
