// src/rendering_lib/scene_geometry.rs

use crate::config::EditorConfig;
use crate::engine_lib::presenter::Presenter;
use crate::engine_lib::scene_types::MarkerHandle;
use crate::geometry::Point2;
use crate::polygon::MAX_VERTICES;
use super::triangulate::triangulate;
use super::vertex::Vertex;

pub const MARKER_SEGMENTS: usize = 16;

// Per-frame upper bounds with every vertex of a full boundary on screen.
pub const SCENE_MAX_VERTICES: usize =
    MAX_VERTICES * (MARKER_SEGMENTS + 1) + MAX_VERTICES * 4 + MAX_VERTICES;
pub const SCENE_MAX_INDICES: usize =
    MAX_VERTICES * MARKER_SEGMENTS * 3 + MAX_VERTICES * 6 + (MAX_VERTICES - 2) * 3;

// Markers sit slightly in front of the polygon plane.
const MARKER_Z: f32 = 0.002;
const EDGE_Z: f32 = 0.001;
const FILL_Z: f32 = 0.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    pub marker_radius: f32,
    pub edge_width: f32,
    pub marker_color: [f32; 4],
    pub edge_color: [f32; 4],
    pub fill_color: [f32; 4],
}

impl From<&EditorConfig> for SceneStyle {
    fn from(config: &EditorConfig) -> Self {
        Self {
            marker_radius: config.marker_radius,
            edge_width: config.edge_width,
            marker_color: config.marker_color,
            edge_color: config.edge_color,
            fill_color: config.fill_color,
        }
    }
}

/// Retained, CPU-side copy of what is on screen: markers, outline and fill.
///
/// The fill is triangulated when it changes, not every frame.
pub struct SceneGeometry {
    style: SceneStyle,
    markers: Vec<Option<Point2>>,
    free_slots: Vec<u32>,
    edges: Vec<(Point2, Point2)>,
    fill_outline: Vec<Point2>,
    fill_triangles: Vec<[usize; 3]>,
}

impl SceneGeometry {
    pub fn new(style: SceneStyle) -> Self {
        Self {
            style,
            markers: Vec::new(),
            free_slots: Vec::new(),
            edges: Vec::new(),
            fill_outline: Vec::new(),
            fill_triangles: Vec::new(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_some()).count()
    }

    pub fn marker_position(&self, handle: MarkerHandle) -> Option<Point2> {
        self.markers.get(handle.0 as usize).copied().flatten()
    }

    pub fn edges(&self) -> &[(Point2, Point2)] {
        &self.edges
    }

    pub fn fill_triangles(&self) -> &[[usize; 3]] {
        &self.fill_triangles
    }

    /// Appends this frame's triangles: fill first, then edges, then markers on top.
    pub fn tessellate(&self, vertices: &mut Vec<Vertex>, indices: &mut Vec<u16>) {
        self.push_fill(vertices, indices);
        for &(a, b) in &self.edges {
            self.push_edge(a, b, vertices, indices);
        }
        for center in self.markers.iter().flatten() {
            self.push_marker(*center, vertices, indices);
        }
    }

    fn push_fill(&self, vertices: &mut Vec<Vertex>, indices: &mut Vec<u16>) {
        if self.fill_triangles.is_empty() {
            return;
        }
        let base = vertices.len() as u16;
        for point in &self.fill_outline {
            vertices.push(Vertex::new(point.to_world(FILL_Z).into(), self.style.fill_color));
        }
        for triangle in &self.fill_triangles {
            indices.extend(triangle.iter().map(|&i| base + i as u16));
        }
    }

    fn push_edge(&self, a: Point2, b: Point2, vertices: &mut Vec<Vertex>, indices: &mut Vec<u16>) {
        let direction = glam::Vec2::new(b.x - a.x, b.y - a.y).normalize_or_zero();
        if direction == glam::Vec2::ZERO {
            return;
        }
        let offset = Point2::from(direction.perp() * (self.style.edge_width * 0.5));
        let base = vertices.len() as u16;
        for corner in [a + offset, b + offset, b - offset, a - offset] {
            vertices.push(Vertex::new(corner.to_world(EDGE_Z).into(), self.style.edge_color));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn push_marker(&self, center: Point2, vertices: &mut Vec<Vertex>, indices: &mut Vec<u16>) {
        let base = vertices.len() as u16;
        vertices.push(Vertex::new(center.to_world(MARKER_Z).into(), self.style.marker_color));
        for i in 0..MARKER_SEGMENTS {
            let angle = (i as f32) * std::f32::consts::TAU / (MARKER_SEGMENTS as f32);
            let rim = center + Point2::new(angle.cos(), angle.sin()) * self.style.marker_radius;
            vertices.push(Vertex::new(rim.to_world(MARKER_Z).into(), self.style.marker_color));
        }
        for i in 0..MARKER_SEGMENTS as u16 {
            let next = (i + 1) % MARKER_SEGMENTS as u16;
            indices.extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }
}

impl Presenter for SceneGeometry {
    fn add_marker(&mut self, position: Point2) -> MarkerHandle {
        match self.free_slots.pop() {
            Some(slot) => {
                self.markers[slot as usize] = Some(position);
                MarkerHandle(slot)
            }
            None => {
                self.markers.push(Some(position));
                MarkerHandle(self.markers.len() as u32 - 1)
            }
        }
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        match self.markers.get_mut(handle.0 as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.free_slots.push(handle.0);
            }
            _ => log::warn!("remove of unknown marker {handle:?}"),
        }
    }

    fn set_marker_position(&mut self, handle: MarkerHandle, position: Point2) {
        match self.markers.get_mut(handle.0 as usize) {
            Some(Some(slot)) => *slot = position,
            _ => log::warn!("position update for unknown marker {handle:?}"),
        }
    }

    fn draw_edges(&mut self, edges: &[(Point2, Point2)]) {
        self.edges.clear();
        self.edges.extend_from_slice(edges);
    }

    fn fill_polygon(&mut self, ordered_points: &[Point2]) {
        self.fill_outline.clear();
        self.fill_outline.extend_from_slice(ordered_points);
        self.fill_triangles = triangulate(&self.fill_outline);
    }
}
