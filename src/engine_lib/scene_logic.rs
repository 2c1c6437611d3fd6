// src/engine_lib/scene_logic.rs
use crate::engine_lib::presenter::Presenter;
use crate::geometry::Point2;
use crate::polygon::PolygonModel;

/// Index of the vertex closest to `point`, if any lies within `radius`.
/// Ties go to the lower index.
pub fn pick_vertex(model: &PolygonModel, point: Point2, radius: f32) -> Option<usize> {
    let radius_sq = radius * radius;
    let mut best: Option<(usize, f32)> = None;
    for (index, position) in model.positions().enumerate() {
        let d = position.distance_squared(&point);
        if d > radius_sq {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}

/// Pushes the outline and fill derived from `model` to the presenter.
pub fn redraw_outline(model: &PolygonModel, presenter: &mut impl Presenter) {
    let edges: Vec<(Point2, Point2)> = model.edges().collect();
    presenter.draw_edges(&edges);

    if model.is_drawable() {
        let points: Vec<Point2> = model.positions().collect();
        presenter.fill_polygon(&points);
    } else {
        presenter.fill_polygon(&[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::MAX_VERTICES;

    #[test]
    fn picks_nearest_vertex_in_radius() {
        let model = PolygonModel::from_points(
            &[Point2::new(0.0, 0.0), Point2::new(0.3, 0.0), Point2::new(5.0, 5.0)],
            MAX_VERTICES,
        );
        assert_eq!(pick_vertex(&model, Point2::new(0.2, 0.0), 0.5), Some(1));
        assert_eq!(pick_vertex(&model, Point2::new(0.05, 0.0), 0.5), Some(0));
        assert_eq!(pick_vertex(&model, Point2::new(2.5, 2.5), 0.5), None);
    }

    #[test]
    fn equidistant_pick_prefers_lower_index() {
        let model = PolygonModel::from_points(
            &[Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 3.0)],
            MAX_VERTICES,
        );
        assert_eq!(pick_vertex(&model, Point2::ZERO, 1.0), Some(0));
    }
}
