//! Sphere primitive for ray tracing.

use glint_math::{Ray, Vec3};

/// A sphere together with the surface attributes the tracer shades with.
///
/// A sphere whose `emission_color.x` is positive is treated as a light
/// source, and at the same time as an opaque occluder for shadow rays.
/// It plays both roles at once.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    /// Cached radius², used by the intersection test.
    radius_sq: f32,
    /// Surface albedo, components conventionally in [0, 1].
    pub surface_color: Vec3,
    pub emission_color: Vec3,
    /// 0 = opaque, 1 = fully transmissive.
    pub transparency: f32,
    /// 0 = matte, 1 = perfect mirror.
    pub reflection: f32,
}

impl Sphere {
    /// Create an opaque, non-reflective, non-emissive sphere.
    pub fn new(center: Vec3, radius: f32, surface_color: Vec3) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
            surface_color,
            emission_color: Vec3::ZERO,
            transparency: 0.0,
            reflection: 0.0,
        }
    }

    /// Set the reflection coefficient.
    pub fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = reflection;
        self
    }

    /// Set the transparency coefficient.
    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    /// Set the emission color, marking the sphere as a light source.
    pub fn with_emission(mut self, emission_color: Vec3) -> Self {
        self.emission_color = emission_color;
        self
    }

    /// Radius squared, cached at construction.
    #[inline]
    pub fn radius_sq(&self) -> f32 {
        self.radius_sq
    }

    /// Whether this sphere acts as a light source.
    #[inline]
    pub fn is_emissive(&self) -> bool {
        self.emission_color.x > 0.0
    }

    /// Analytic ray/sphere intersection (geometric form).
    ///
    /// Returns both roots `(t0, t1)` with `t0 <= t1`, or `None` when the
    /// ray misses or the sphere lies entirely behind the origin. A
    /// tangent hit yields `t0 == t1` and counts as an intersection. The
    /// caller decides which root is the valid hit distance.
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius_sq {
            return None;
        }
        let thc = (self.radius_sq - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}
