// src/rendering_lib/triangulate.rs

use crate::geometry::{orientation, signed_area, Orientation, Point2};

/// Closed test: points on the triangle's boundary count as inside.
#[inline(always)]
fn in_triangle(p: Point2, a: Point2, b: Point2, c: Point2, winding: Orientation) -> bool {
    let opposite = winding.reversed();
    orientation(a, b, p) != opposite
        && orientation(b, c, p) != opposite
        && orientation(c, a, p) != opposite
}

fn is_ear(points: &[Point2], ring: &[usize], i: usize, winding: Orientation) -> bool {
    let m = ring.len();
    let (ia, ib, ic) = (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
    let (a, b, c) = (points[ia], points[ib], points[ic]);

    // Reflex and collinear corners are never ears.
    if orientation(a, b, c) != winding {
        return false;
    }
    ring.iter()
        .filter(|&&k| k != ia && k != ib && k != ic)
        .all(|&k| !in_triangle(points[k], a, b, c, winding))
}

/// Ear-clips a simple polygon of either winding into `n - 2` index triangles.
///
/// Input that has no ear left (a self-intersecting outline, or all points
/// collinear) is finished off as a fan so the outline still gets a fill.
pub fn triangulate(points: &[Point2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let winding = if signed_area(points) < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    };

    let mut ring: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while ring.len() > 3 {
        let m = ring.len();
        match (0..m).find(|&i| is_ear(points, &ring, i, winding)) {
            Some(i) => {
                triangles.push([ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]]);
                ring.remove(i);
            }
            None => {
                log::trace!("no ear among {m} remaining vertices, falling back to a fan");
                for k in 1..(m - 1) {
                    triangles.push([ring[0], ring[k], ring[k + 1]]);
                }
                return triangles;
            }
        }
    }
    triangles.push([ring[0], ring[1], ring[2]]);
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(points: &[Point2], triangles: &[[usize; 3]]) -> f32 {
        triangles
            .iter()
            .map(|t| signed_area(&[points[t[0]], points[t[1]], points[t[2]]]).abs())
            .sum()
    }

    fn l_shape() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ]
    }

    #[test]
    fn fewer_than_three_points_give_nothing() {
        assert!(triangulate(&[Point2::ZERO, Point2::new(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn square_splits_in_two() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&square);
        assert_eq!(triangles.len(), 2);
        assert_eq!(area_of(&square, &triangles), 4.0);
    }

    #[test]
    fn concave_outline_is_covered_exactly() {
        let points = l_shape();
        let triangles = triangulate(&points);
        assert_eq!(triangles.len(), points.len() - 2);
        assert_eq!(area_of(&points, &triangles), signed_area(&points).abs());
        for t in &triangles {
            assert_eq!(
                orientation(points[t[0]], points[t[1]], points[t[2]]),
                Orientation::CounterClockwise
            );
        }
    }

    #[test]
    fn clockwise_outline_keeps_its_winding() {
        let mut points = l_shape();
        points.reverse();
        let triangles = triangulate(&points);
        assert_eq!(triangles.len(), points.len() - 2);
        assert_eq!(area_of(&points, &triangles), signed_area(&points).abs());
        for t in &triangles {
            assert_eq!(
                orientation(points[t[0]], points[t[1]], points[t[2]]),
                Orientation::Clockwise
            );
        }
    }

    #[test]
    fn bow_tie_still_gets_triangles() {
        let bow_tie = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(triangulate(&bow_tie).len(), 2);
    }
}
