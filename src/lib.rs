// src/lib.rs

pub mod geometry;
pub mod intersection;
pub mod polygon;
pub mod generator;
pub mod config;
pub mod error;
pub mod engine_lib;
pub mod rendering_lib;
pub mod app;
pub mod ui;

pub use geometry::{orientation, on_segment, segments_intersect, Orientation, Point2};
pub use intersection::SelfIntersection;
pub use polygon::{DragSnapshot, PolygonModel, Vertex, VertexId, MAX_VERTICES};
pub use config::{EditorConfig, EditorMode, InsertionPolicy};
pub use error::EditError;
