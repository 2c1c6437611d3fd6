// src/polygon.rs

use crate::error::EditError;
use crate::geometry::{signed_area, Point2};

/// Upper bound on boundary length; keeps the O(n^2) crossing check interactive.
pub const MAX_VERTICES: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Point2,
}

/// Position of a vertex captured when a drag begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSnapshot {
    pub vertex: VertexId,
    pub position: Point2,
}

/// The polygon boundary: vertices in winding order, closed from last back to first.
#[derive(Clone, Debug)]
pub struct PolygonModel {
    vertices: Vec<Vertex>,
    next_id: u32,
    max_vertices: usize,
}

impl Default for PolygonModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonModel {
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_VERTICES)
    }

    pub fn with_capacity_limit(max_vertices: usize) -> Self {
        Self {
            vertices: Vec::new(),
            next_id: 0,
            max_vertices,
        }
    }

    /// Builds a model from `points`, truncated to the capacity limit.
    pub fn from_points(points: &[Point2], max_vertices: usize) -> Self {
        let mut model = Self::with_capacity_limit(max_vertices);
        for &point in points.iter().take(max_vertices) {
            model.push_unchecked(point);
        }
        model
    }

    fn push_unchecked(&mut self, position: Point2) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex { id, position });
        id
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.max_vertices
    }

    /// At least three vertices: something to fill.
    pub fn is_drawable(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> &Vertex {
        self.check_index(index);
        &self.vertices[index]
    }

    pub fn position(&self, index: usize) -> Point2 {
        self.vertex(index).position
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    pub fn signed_area(&self) -> f32 {
        let points: Vec<Point2> = self.positions().collect();
        signed_area(&points)
    }

    /// Sets the live position of vertex `index`. Callers validate first.
    pub fn move_vertex(&mut self, index: usize, new_position: Point2) {
        self.check_index(index);
        self.vertices[index].position = new_position;
    }

    pub fn append_vertex(&mut self, position: Point2) -> Result<VertexId, EditError> {
        if self.is_full() {
            return Err(EditError::BoundaryFull { max: self.max_vertices });
        }
        Ok(self.push_unchecked(position))
    }

    /// Consecutive vertex pairs, closing back to the first vertex.
    ///
    /// Two vertices yield a single edge; the closing edge would repeat it.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            vertices: &self.vertices,
            next: 0,
        }
    }

    pub fn snapshot_before_drag(&self, index: usize) -> DragSnapshot {
        let vertex = self.vertex(index);
        DragSnapshot {
            vertex: vertex.id,
            position: vertex.position,
        }
    }

    /// Puts vertex `index` back exactly where `snapshot` found it.
    pub fn restore_if_rejected(&mut self, index: usize, snapshot: DragSnapshot) {
        self.check_index(index);
        assert_eq!(
            self.vertices[index].id, snapshot.vertex,
            "snapshot of {:?} applied to vertex {index}",
            snapshot.vertex
        );
        self.vertices[index].position = snapshot.position;
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.vertices.len(),
            "vertex index {index} out of range for boundary of {} vertices",
            self.vertices.len()
        );
    }
}

#[derive(Clone, Debug)]
pub struct Edges<'a> {
    vertices: &'a [Vertex],
    next: usize,
}

impl<'a> Edges<'a> {
    fn edge_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = (Point2, Point2);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.edge_count() {
            return None;
        }
        let i = self.next;
        let j = (i + 1) % self.vertices.len();
        self.next += 1;
        Some((self.vertices[i].position, self.vertices[j].position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.edge_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Edges<'a> {}
