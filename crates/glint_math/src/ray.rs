use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Rays are transient values: the tracer builds them per pixel and per
/// bounce, nothing stores them. Every consumer assumes `direction` is
/// unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The caller is responsible for `direction` being
    /// unit length; see [`Ray::unit`] for the checked path.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from an arbitrary direction, normalizing it.
    ///
    /// Returns `None` when the direction is zero-length or non-finite,
    /// so degenerate input never reaches a `normalize` that would yield
    /// NaN components.
    pub fn unit(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !direction.is_finite() || direction.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(Self {
            origin,
            direction: direction.normalize(),
        })
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_unit_normalizes() {
        let ray = Ray::unit(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0)).unwrap();
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_unit_rejects_degenerate() {
        assert!(Ray::unit(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(Ray::unit(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        // Both should be usable
        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
