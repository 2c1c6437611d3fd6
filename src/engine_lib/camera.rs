// src/engine_lib/camera.rs

use glam::{Mat4, Vec3, Vec4Swizzles};
use crate::geometry::Point2;

/// Half-size of the invisible plane (z = 0) that pointer rays are tested against.
pub const PICK_PLANE_HALF_EXTENT: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_rad: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(
        position: Vec3,
        fov_y_deg: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fov_y_rad: fov_y_deg.to_radians(),
            znear,
            zfar,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, aspect_ratio, self.znear, self.zfar)
    }

    pub fn view_projection(&self, screen_width: f32, screen_height: f32) -> Mat4 {
        self.projection_matrix(screen_width / screen_height) * self.view_matrix()
    }

    /// World point to pixel coordinates (origin top-left), `None` if outside the view depth range.
    pub fn project_to_screen(
        &self,
        world: Vec3,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Point2> {
        let clip = self.view_projection(screen_width, screen_height) * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let screen_x = (ndc.x + 1.0) * 0.5 * screen_width;
        let screen_y = (1.0 - ndc.y) * 0.5 * screen_height; // Invert Y for screen space
        Some(Point2::new(screen_x, screen_y))
    }

    /// Ray through pixel `screen`, as origin on the near plane and unit direction.
    pub fn screen_ray(&self, screen: Point2, screen_width: f32, screen_height: f32) -> (Vec3, Vec3) {
        let ndc_x = screen.x / screen_width * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y / screen_height * 2.0;
        let inverse = self.view_projection(screen_width, screen_height).inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        (near, (far - near).normalize_or_zero())
    }

    /// Where the pointer ray meets the z = 0 picking plane.
    pub fn pick_on_plane(
        &self,
        screen: Point2,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Point2> {
        let (origin, direction) = self.screen_ray(screen, screen_width, screen_height);
        if direction.z.abs() < 1e-6 {
            return None;
        }
        let t = -origin.z / direction.z;
        if t < 0.0 {
            return None;
        }
        let hit = origin + direction * t;
        if hit.x.abs() > PICK_PLANE_HALF_EXTENT || hit.y.abs() > PICK_PLANE_HALF_EXTENT {
            return None;
        }
        Some(Point2::new(hit.x, hit.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), 75.0, 0.1, 1000.0)
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let camera = editor_camera();
        let centre = camera.project_to_screen(Vec3::ZERO, 800.0, 600.0).unwrap();
        assert!((centre.x - 400.0).abs() < 1e-3);
        assert!((centre.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn points_behind_camera_are_not_projected() {
        let camera = editor_camera();
        assert!(camera.project_to_screen(Vec3::new(0.0, 0.0, 20.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn picking_inverts_projection_on_the_plane() {
        let camera = editor_camera();
        let world = Point2::new(1.5, -0.75);
        let screen = camera.project_to_screen(world.to_world(0.0), 1024.0, 768.0).unwrap();
        // Screen y grows downwards.
        assert!(screen.x > 512.0 && screen.y > 384.0);
        let picked = camera.pick_on_plane(screen, 1024.0, 768.0).unwrap();
        assert!((picked.x - world.x).abs() < 1e-2);
        assert!((picked.y - world.y).abs() < 1e-2);
    }

    #[test]
    fn rays_that_never_reach_the_plane_miss() {
        let mut camera = editor_camera();
        camera.target = Vec3::new(100.0, 0.0, 10.0);
        assert!(camera.pick_on_plane(Point2::new(400.0, 300.0), 800.0, 600.0).is_none());
    }
}
