//! Camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera fixed at the world origin, looking down -Z.
///
/// The intrinsics are derived once per render from the image size and
/// the vertical field of view; after that ray generation is pure
/// arithmetic per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    inv_width: f32,
    inv_height: f32,
    aspect: f32,
    angle: f32,
}

impl Camera {
    /// Derive camera intrinsics for an image of the given size.
    pub fn new(width: u32, height: u32, fov_degrees: f32) -> Self {
        Self {
            inv_width: 1.0 / width as f32,
            inv_height: 1.0 / height as f32,
            aspect: width as f32 / height as f32,
            angle: (std::f32::consts::PI * 0.5 * fov_degrees / 180.0).tan(),
        }
    }

    /// Primary ray through the center of pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let xx = (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * self.angle;
        // The -1 z component keeps the direction non-zero for any pixel.
        Ray::new(Vec3::ZERO, Vec3::new(xx, yy, -1.0).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_down_axis() {
        // Odd dimensions put a pixel center exactly on the axis.
        let camera = Camera::new(101, 101, 30.0);
        let ray = camera.primary_ray(50, 50);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = Camera::new(64, 48, 30.0);
        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47), (31, 23)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_image_plane_orientation() {
        let camera = Camera::new(64, 48, 30.0);

        // x grows rightward, y grows downward in raster space
        assert!(camera.primary_ray(0, 24).direction.x < 0.0);
        assert!(camera.primary_ray(63, 24).direction.x > 0.0);
        assert!(camera.primary_ray(32, 0).direction.y > 0.0);
        assert!(camera.primary_ray(32, 47).direction.y < 0.0);
    }

    #[test]
    fn test_wider_fov_spreads_rays() {
        let narrow = Camera::new(64, 48, 20.0);
        let wide = Camera::new(64, 48, 80.0);

        assert!(wide.primary_ray(0, 0).direction.x < narrow.primary_ray(0, 0).direction.x);
    }
}
