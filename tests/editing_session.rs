// tests/editing_session.rs
//
// End-to-end sessions through the controller, with the real scene geometry as presenter.

use polygon_editor::config::{EditorConfig, EditorMode, InsertionPolicy};
use polygon_editor::engine_lib::{DragState, EditOutcome, InteractionController, MarkerHandle, Presenter};
use polygon_editor::generator::PolygonGenerator;
use polygon_editor::geometry::Point2;
use polygon_editor::intersection::SelfIntersection;
use polygon_editor::polygon::PolygonModel;
use polygon_editor::rendering_lib::{SceneGeometry, SceneStyle};

fn session(points: &[Point2], config: &EditorConfig) -> (InteractionController, PolygonModel, SceneGeometry) {
    let model = PolygonModel::from_points(points, config.max_vertices);
    let mut scene = SceneGeometry::new(SceneStyle::from(config));
    let mut controller = InteractionController::new(config);
    controller.attach(&model, &mut scene);
    (controller, model, scene)
}

fn square() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 2.0),
    ]
}

#[test]
fn square_corner_dragged_across_opposite_edge_snaps_back() {
    let (mut controller, mut model, mut scene) = session(&square(), &EditorConfig::default());
    let marker = controller.markers()[0];

    assert!(SelfIntersection::would_cross(&model, 0, Point2::new(3.0, 1.0)));

    controller.drag_start(&model, marker);
    let outcome = controller.drag_move(&mut model, &mut scene, marker, Point2::new(3.0, 1.0));
    assert_eq!(outcome, EditOutcome::Reverted { index: 0 });
    assert!(model.position(0).is_bitwise_eq(&Point2::new(0.0, 0.0)));
    assert_eq!(scene.marker_position(marker), Some(Point2::new(0.0, 0.0)));
    controller.drag_end(marker);
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn square_corner_dragged_inside_is_committed() {
    let (mut controller, mut model, mut scene) = session(&square(), &EditorConfig::default());
    let marker = controller.markers()[0];

    assert!(!SelfIntersection::would_cross(&model, 0, Point2::new(1.0, 1.0)));

    controller.drag_start(&model, marker);
    let outcome = controller.drag_move(&mut model, &mut scene, marker, Point2::new(1.0, 1.0));
    assert_eq!(outcome, EditOutcome::Moved { index: 0 });
    assert_eq!(model.position(0), Point2::new(1.0, 1.0));
    assert_eq!(scene.edges()[0].0, Point2::new(1.0, 1.0));
    // (1, 1) is collinear with its neighbours; the fill still has two triangles.
    assert_eq!(scene.fill_triangles().len(), 2);
}

#[test]
fn hexagon_vertex_slides_along_adjacent_edge() {
    let hexagon = PolygonGenerator::regular(Point2::ZERO, 2.0, 6);
    let (mut controller, mut model, mut scene) = session(&hexagon, &EditorConfig::default());
    let marker = controller.markers()[0];
    let midpoint = hexagon[0].midpoint(&hexagon[1]);

    controller.drag_start(&model, marker);
    let outcome = controller.drag_move(&mut model, &mut scene, marker, midpoint);
    assert_eq!(outcome, EditOutcome::Moved { index: 0 });
    assert_eq!(model.position(0), midpoint);
}

#[test]
fn free_form_session_with_crossing_guard() {
    let config = EditorConfig {
        mode: EditorMode::FreeForm,
        insertion_policy: InsertionPolicy::RejectCrossing,
        ..EditorConfig::default()
    };
    let (mut controller, mut model, mut scene) = session(&[], &config);

    for p in square() {
        assert!(matches!(
            controller.pointer_down(&mut model, &mut scene, p),
            EditOutcome::Appended(_)
        ));
    }
    assert_eq!(scene.marker_count(), 4);
    assert_eq!(scene.edges().len(), 4);

    // Grab the top-right corner and pull it through the bottom edge.
    assert_eq!(
        controller.pointer_down(&mut model, &mut scene, Point2::new(2.0, 2.0)),
        EditOutcome::DragStarted { index: 2 }
    );
    assert_eq!(
        controller.pointer_move(&mut model, &mut scene, Point2::new(1.0, -1.0)),
        EditOutcome::Reverted { index: 2 }
    );
    assert_eq!(controller.pointer_up(), EditOutcome::DragEnded);
    assert_eq!(model.position(2), Point2::new(2.0, 2.0));
    assert_eq!(controller.rejected_moves(), 1);
}

#[test]
fn reset_returns_scene_to_seed() {
    let config = EditorConfig::default();
    let hexagon = PolygonGenerator::regular(Point2::ZERO, config.seed_radius, config.seed_vertex_count);
    let (mut controller, mut model, mut scene) = session(&square(), &config);

    controller.reset(&mut model, &mut scene, &hexagon);
    assert_eq!(model.len(), 6);
    assert_eq!(scene.marker_count(), 6);
    assert_eq!(scene.fill_triangles().len(), 4);

    // Stale handles from before the reset do nothing.
    scene.set_marker_position(MarkerHandle(999), Point2::ZERO);
    assert_eq!(scene.marker_count(), 6);
}
