// src/intersection.rs

use crate::geometry::{segments_intersect, Point2};
use crate::polygon::PolygonModel;

pub struct SelfIntersection;

impl SelfIntersection {
    /// Edges `i` and `j` of an `n`-gon share a vertex.
    #[inline(always)]
    fn edges_adjacent(i: usize, j: usize, n: usize) -> bool {
        j == (i + 1) % n || i == (j + 1) % n
    }

    /// First pair of non-adjacent closed-boundary edges that touch, as edge indices `(i, j)`, `i < j`.
    ///
    /// `position(k)` supplies vertex `k` of a boundary with `n` vertices.
    fn first_crossing(n: usize, position: impl Fn(usize) -> Point2) -> Option<(usize, usize)> {
        // A triangle has no pair of non-adjacent edges.
        if n < 4 {
            return None;
        }
        for i in 0..n {
            let (a1, a2) = (position(i), position((i + 1) % n));
            for j in (i + 1)..n {
                if Self::edges_adjacent(i, j, n) {
                    continue;
                }
                let (b1, b2) = (position(j), position((j + 1) % n));
                if segments_intersect(a1, a2, b1, b2) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Would moving vertex `moving_index` to `candidate` make the polygon self-intersect?
    ///
    /// Evaluated against a hypothetical boundary; `boundary` is never touched.
    pub fn would_cross(boundary: &PolygonModel, moving_index: usize, candidate: Point2) -> bool {
        let n = boundary.len();
        assert!(
            moving_index < n,
            "vertex index {moving_index} out of range for boundary of {n} vertices"
        );
        let vertices = boundary.vertices();
        let crossing = Self::first_crossing(n, |k| {
            if k == moving_index {
                candidate
            } else {
                vertices[k].position
            }
        });
        if let Some((i, j)) = crossing {
            log::trace!("moving vertex {moving_index} to {candidate:?} crosses edges {i} and {j}");
        }
        crossing.is_some()
    }

    /// Would appending `candidate` after the last vertex make the closed polygon self-intersect?
    pub fn would_cross_on_append(boundary: &PolygonModel, candidate: Point2) -> bool {
        let vertices = boundary.vertices();
        let n = vertices.len() + 1;
        Self::first_crossing(n, |k| {
            if k == vertices.len() {
                candidate
            } else {
                vertices[k].position
            }
        })
        .is_some()
    }

    /// True when no two non-adjacent edges of `points`, read as a closed boundary, touch.
    pub fn is_simple(points: &[Point2]) -> bool {
        Self::first_crossing(points.len(), |k| points[k]).is_none()
    }
}
