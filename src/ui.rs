// src/ui.rs

use crate::config::EditorMode;
use crate::engine_lib::scene_types::EditOutcome;

/// Read-only view of editor state for the overlay.
pub struct EditorStatus {
    pub mode: EditorMode,
    pub vertex_count: usize,
    pub max_vertices: usize,
    pub dragging: Option<usize>,
    pub rejected_moves: u64,
    pub last_outcome: Option<EditOutcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    None,
    Reset,
}

pub fn build_ui(ctx: &egui::Context, status: &EditorStatus) -> UiAction {
    let mut action = UiAction::None;
    egui::Window::new("Polygon Editor")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Mode: {}", status.mode));
                ui.label(format!("Vertices: {} / {}", status.vertex_count, status.max_vertices));
                match status.dragging {
                    Some(index) => ui.label(format!("Dragging vertex {index}")),
                    None => ui.label("Idle"),
                };
                ui.label(format!("Rejected moves: {}", status.rejected_moves));
                if let Some(outcome) = status.last_outcome {
                    ui.label(format!("Last: {outcome:?}"));
                }
                ui.separator();

                ui.label("🖱 Mouse Controls:");
                ui.label("   Drag a red marker: move vertex");
                if status.mode == EditorMode::FreeForm {
                    ui.label("   Click empty space: add vertex");
                }
                ui.label("   Moves that would cross an edge snap back");
                ui.separator();

                if ui.button("Reset").clicked() {
                    action = UiAction::Reset;
                }
            });
        });
    action
}
