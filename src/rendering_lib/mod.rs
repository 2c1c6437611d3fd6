// src/rendering_lib/mod.rs

pub mod renderer;
pub mod scene_geometry;
pub mod shader;
pub mod triangulate;
pub mod vertex;

pub use renderer::Renderer;
pub use scene_geometry::{SceneGeometry, SceneStyle};
pub use shader::WGSL_SHADER_SOURCE;
pub use vertex::Vertex;
