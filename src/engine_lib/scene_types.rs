// src/engine_lib/scene_types.rs
use crate::polygon::{DragSnapshot, VertexId};

/// Opaque id of an on-screen vertex marker, issued by the presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        index: usize,
        marker: MarkerHandle,
        snapshot: DragSnapshot,
    },
}

impl DragState {
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { index, .. } => Some(*index),
        }
    }
}

/// What an input callback did to the polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    DragStarted { index: usize },
    Moved { index: usize },
    /// The proposed position would cross an edge; the vertex went back to its drag-start position.
    Reverted { index: usize },
    DragEnded,
    Appended(VertexId),
    InsertionRejected,
    BoundaryFull,
    Ignored,
}
