// src/engine_lib/controller.rs

use crate::config::{EditorConfig, EditorMode, InsertionPolicy};
use crate::engine_lib::presenter::Presenter;
use crate::engine_lib::scene_logic::{pick_vertex, redraw_outline};
use crate::engine_lib::scene_types::{DragState, EditOutcome, MarkerHandle};
use crate::geometry::Point2;
use crate::intersection::SelfIntersection;
use crate::polygon::PolygonModel;

/// Turns drag and pointer callbacks into polygon edits, gated by the crossing check.
///
/// `markers[i]` is the marker of vertex `i`; both sequences only grow by
/// appending, so indices stay aligned until `reset`.
pub struct InteractionController {
    state: DragState,
    markers: Vec<MarkerHandle>,
    mode: EditorMode,
    insertion_policy: InsertionPolicy,
    pick_radius: f32,
    rejected_moves: u64,
}

impl InteractionController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            state: DragState::Idle,
            markers: Vec::new(),
            mode: config.mode,
            insertion_policy: config.insertion_policy,
            pick_radius: config.pick_radius,
            rejected_moves: 0,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub fn rejected_moves(&self) -> u64 {
        self.rejected_moves
    }

    pub fn marker_index(&self, marker: MarkerHandle) -> Option<usize> {
        self.markers.iter().position(|&m| m == marker)
    }

    /// Creates a marker for every vertex already in `model` and draws the outline.
    pub fn attach(&mut self, model: &PolygonModel, presenter: &mut impl Presenter) {
        for handle in self.markers.drain(..) {
            presenter.remove_marker(handle);
        }
        self.markers = model.positions().map(|p| presenter.add_marker(p)).collect();
        redraw_outline(model, presenter);
    }

    pub fn drag_start(&mut self, model: &PolygonModel, marker: MarkerHandle) -> EditOutcome {
        if let DragState::Dragging { index, .. } = self.state {
            log::warn!("drag start on {marker:?} while vertex {index} is still being dragged");
            return EditOutcome::Ignored;
        }
        let Some(index) = self.marker_index(marker) else {
            log::warn!("drag start on unknown marker {marker:?}");
            return EditOutcome::Ignored;
        };
        let snapshot = model.snapshot_before_drag(index);
        self.state = DragState::Dragging { index, marker, snapshot };
        log::trace!("drag start: vertex {index} at {:?}", snapshot.position);
        EditOutcome::DragStarted { index }
    }

    pub fn drag_move(
        &mut self,
        model: &mut PolygonModel,
        presenter: &mut impl Presenter,
        marker: MarkerHandle,
        pointer: Point2,
    ) -> EditOutcome {
        let DragState::Dragging { index, marker: dragged, snapshot } = self.state else {
            return EditOutcome::Ignored;
        };
        if dragged != marker {
            log::warn!("drag move on {marker:?} but {dragged:?} is being dragged");
            return EditOutcome::Ignored;
        }

        if SelfIntersection::would_cross(model, index, pointer) {
            model.restore_if_rejected(index, snapshot);
            self.rejected_moves += 1;
            log::debug!("rejected move of vertex {index} to {pointer:?}");
            presenter.set_marker_position(marker, snapshot.position);
            redraw_outline(model, presenter);
            EditOutcome::Reverted { index }
        } else {
            model.move_vertex(index, pointer);
            log::trace!("vertex {index} -> {pointer:?}");
            presenter.set_marker_position(marker, pointer);
            redraw_outline(model, presenter);
            EditOutcome::Moved { index }
        }
    }

    pub fn drag_end(&mut self, marker: MarkerHandle) -> EditOutcome {
        match self.state {
            DragState::Dragging { marker: dragged, index, .. } if dragged == marker => {
                self.state = DragState::Idle;
                log::trace!("drag end: vertex {index}");
                EditOutcome::DragEnded
            }
            _ => EditOutcome::Ignored,
        }
    }

    /// Press on the picking plane: grab the nearest marker, or add a vertex in free-form mode.
    pub fn pointer_down(
        &mut self,
        model: &mut PolygonModel,
        presenter: &mut impl Presenter,
        world: Point2,
    ) -> EditOutcome {
        if self.state != DragState::Idle {
            return EditOutcome::Ignored;
        }
        if let Some(index) = pick_vertex(model, world, self.pick_radius) {
            let marker = self.markers[index];
            return self.drag_start(model, marker);
        }
        match self.mode {
            EditorMode::FixedVertices => EditOutcome::Ignored,
            EditorMode::FreeForm => self.append(model, presenter, world),
        }
    }

    pub fn pointer_move(
        &mut self,
        model: &mut PolygonModel,
        presenter: &mut impl Presenter,
        world: Point2,
    ) -> EditOutcome {
        match self.state {
            DragState::Dragging { marker, .. } => self.drag_move(model, presenter, marker, world),
            DragState::Idle => EditOutcome::Ignored,
        }
    }

    pub fn pointer_up(&mut self) -> EditOutcome {
        match self.state {
            DragState::Dragging { marker, .. } => self.drag_end(marker),
            DragState::Idle => EditOutcome::Ignored,
        }
    }

    fn append(
        &mut self,
        model: &mut PolygonModel,
        presenter: &mut impl Presenter,
        world: Point2,
    ) -> EditOutcome {
        if self.insertion_policy == InsertionPolicy::RejectCrossing
            && SelfIntersection::would_cross_on_append(model, world)
        {
            log::debug!("rejected new vertex at {world:?}: closing edge would cross");
            return EditOutcome::InsertionRejected;
        }
        match model.append_vertex(world) {
            Ok(id) => {
                self.markers.push(presenter.add_marker(world));
                redraw_outline(model, presenter);
                log::debug!("appended {id:?} at {world:?}");
                EditOutcome::Appended(id)
            }
            Err(e) => {
                log::debug!("{e}");
                EditOutcome::BoundaryFull
            }
        }
    }

    /// Drops every marker and vertex, then starts over from `seed`.
    pub fn reset(
        &mut self,
        model: &mut PolygonModel,
        presenter: &mut impl Presenter,
        seed: &[Point2],
    ) {
        for handle in self.markers.drain(..) {
            presenter.remove_marker(handle);
        }
        self.state = DragState::Idle;
        model.clear();
        for &point in seed {
            if let Err(e) = model.append_vertex(point) {
                log::warn!("seed truncated: {e}");
                break;
            }
        }
        self.attach(model, presenter);
        log::info!("polygon reset with {} vertices", model.len());
    }
}
