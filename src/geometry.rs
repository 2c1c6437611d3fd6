// src/geometry.rs

use std::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &Point2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(&self, other: &Point2) -> f32 {
        let d = *other - *self;
        d.dot(&d)
    }

    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Lifts the point into the scene, on the plane `z`.
    pub fn to_world(self, z: f32) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, z)
    }

    pub fn is_bitwise_eq(&self, other: &Point2) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;
    fn mul(self, rhs: f32) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<glam::Vec2> for Point2 {
    fn from(v: glam::Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Classifies the turn `p -> q -> r` by the sign of `(q - p) x (r - q)`.
///
/// Only an exact zero counts as collinear. There is no tolerance, so
/// nearly collinear float input can land on either side.
#[inline]
pub fn orientation(p: Point2, q: Point2, r: Point2) -> Orientation {
    let cross = (q - p).cross(&(r - q));
    if cross == 0.0 {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// True when `q` lies inside the axis-aligned bounding box of `p` and `r`.
/// Only meaningful once `p`, `q`, `r` are known to be collinear.
#[inline]
pub fn on_segment(p: Point2, q: Point2, r: Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segment test: touching endpoints and collinear overlap count as intersecting.
pub fn segments_intersect(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Collinear && on_segment(a1, b2, a2))
        || (o3 == Orientation::Collinear && on_segment(b1, a1, b2))
        || (o4 == Orientation::Collinear && on_segment(b1, a2, b2))
}

/// Shoelace area, positive for counter-clockwise winding.
pub fn signed_area(points: &[Point2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        twice_area += points[i].cross(&points[j]);
    }
    twice_area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_classifies_turns() {
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0)), Orientation::Collinear);
    }

    #[test]
    fn on_segment_uses_bounding_box() {
        assert!(on_segment(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)));
        assert!(on_segment(p(2.0, 2.0), p(2.0, 2.0), p(0.0, 0.0)));
        assert!(!on_segment(p(0.0, 0.0), p(3.0, 3.0), p(2.0, 2.0)));
    }

    #[test]
    fn proper_crossing_detected() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
    }

    #[test]
    fn disjoint_and_parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(2.0, 1.0)));
    }

    #[test]
    fn collinear_overlap_and_separation() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn touching_endpoint_counts() {
        assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0)));
        // T-junction: endpoint of one segment on the interior of the other.
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 5.0)));
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        assert_eq!(signed_area(&ccw), 4.0);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert_eq!(signed_area(&cw), -4.0);
        assert_eq!(signed_area(&ccw[..2]), 0.0);
    }

    proptest! {
        #[test]
        fn orientation_is_antisymmetric(
            px in -100.0f32..100.0, py in -100.0f32..100.0,
            qx in -100.0f32..100.0, qy in -100.0f32..100.0,
            rx in -100.0f32..100.0, ry in -100.0f32..100.0,
        ) {
            let (a, b, c) = (p(px, py), p(qx, qy), p(rx, ry));
            let forward = orientation(a, b, c);
            prop_assume!(forward != Orientation::Collinear);
            prop_assert_eq!(orientation(c, b, a), forward.reversed());
        }

        #[test]
        fn segments_intersect_is_symmetric(
            coords in proptest::array::uniform8(-10.0f32..10.0),
        ) {
            let [a, b, c, d, e, f, g, h] = coords;
            let lhs = segments_intersect(p(a, b), p(c, d), p(e, f), p(g, h));
            let rhs = segments_intersect(p(e, f), p(g, h), p(a, b), p(c, d));
            prop_assert_eq!(lhs, rhs);
        }
    }
}
