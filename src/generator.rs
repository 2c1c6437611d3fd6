// src/generator.rs

use rand::Rng;
use crate::geometry::Point2;

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Vertex `k` sits at angle `k * 360° / num_vertices`, counter-clockwise from +x.
    pub fn regular(center: Point2, radius: f32, num_vertices: usize) -> Vec<Point2> {
        (0..num_vertices)
            .map(|i| {
                let angle = (i as f32) * std::f32::consts::TAU / (num_vertices as f32);
                Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect()
    }

    /// A random simple polygon: angles strictly increase around `center` and
    /// radii vary by ±20%, so the outline is star-shaped and never crosses itself.
    pub fn star_shaped(
        rng: &mut impl Rng,
        center: Point2,
        avg_radius: f32,
        num_vertices: usize,
    ) -> Vec<Point2> {
        assert!(num_vertices >= 3, "a polygon needs at least 3 vertices");

        let step = std::f32::consts::TAU / (num_vertices as f32);
        let max_perturbation = step * 0.3;

        let min_radius = avg_radius * 0.8;
        let max_radius = avg_radius * 1.2;

        (0..num_vertices)
            .map(|i| {
                let angle = (i as f32) * step + rng.gen_range(-max_perturbation..max_perturbation);
                let radius = rng.gen_range(min_radius..max_radius);
                Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersection::SelfIntersection;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn regular_hexagon_layout() {
        let hexagon = PolygonGenerator::regular(Point2::ZERO, 2.0, 6);
        assert_eq!(hexagon.len(), 6);
        assert_eq!(hexagon[0], Point2::new(2.0, 0.0));
        let v1 = hexagon[1];
        assert!((v1.x - 1.0).abs() < 1e-5);
        assert!((v1.y - 3f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn star_shaped_polygons_are_simple() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 3..40 {
            let points = PolygonGenerator::star_shaped(&mut rng, Point2::new(1.0, -1.0), 5.0, n);
            assert_eq!(points.len(), n);
            assert!(SelfIntersection::is_simple(&points), "{n}-gon crossed itself");
        }
    }
}
