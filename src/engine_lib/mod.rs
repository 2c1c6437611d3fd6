// src/engine_lib/mod.rs
pub mod scene_types;
pub mod scene_logic;
pub mod presenter;
pub mod camera;
pub mod controller;

pub use scene_types::{DragState, EditOutcome, MarkerHandle};
pub use presenter::Presenter;
pub use camera::Camera;
pub use controller::InteractionController;
