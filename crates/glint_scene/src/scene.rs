//! Scene container and nearest-intersection query.

use glint_math::Ray;
use thiserror::Error;

use crate::Sphere;

/// Errors raised while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: {field} has a non-finite component")]
    NonFinite { index: usize, field: &'static str },

    #[error("sphere {index}: {field} must be within [0, 1], got {value}")]
    OutOfRange {
        index: usize,
        field: &'static str,
        value: f32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of the nearest-intersection query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray to the hit point.
    pub t: f32,
    /// Index of the hit sphere within the scene.
    pub index: usize,
    /// The hit sphere itself.
    pub sphere: &'a Sphere,
}

/// An ordered, index-addressable collection of spheres.
///
/// Built once per frame, then read-only: render workers share it by
/// reference and nothing mutates it mid-render. Construction is the
/// single fallible step; degenerate spheres are rejected here so the
/// tracer never sees one.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Build a scene, validating every sphere.
    pub fn new(spheres: Vec<Sphere>) -> Result<Self, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            validate_sphere(index, sphere)?;
        }
        Ok(Self { spheres })
    }

    /// Number of spheres in the scene.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Whether the scene contains no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// All spheres, in construction order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Find the closest admissible intersection along a ray.
    ///
    /// Every sphere is scanned in index order. When the near root is
    /// negative (origin inside the sphere) the far root stands in for
    /// it. The comparison is strict, so on an exact distance tie the
    /// lowest index wins and rendering stays reproducible.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some((t0, t1)) = sphere.intersect(ray) {
                let t = if t0 < 0.0 { t1 } else { t0 };
                if nearest.as_ref().map_or(true, |hit| t < hit.t) {
                    nearest = Some(Hit { t, index, sphere });
                }
            }
        }
        nearest
    }
}

fn validate_sphere(index: usize, sphere: &Sphere) -> Result<(), SceneError> {
    if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
        return Err(SceneError::InvalidRadius {
            index,
            radius: sphere.radius,
        });
    }
    if !sphere.center.is_finite() {
        return Err(SceneError::NonFinite { index, field: "center" });
    }
    if !sphere.surface_color.is_finite() {
        return Err(SceneError::NonFinite {
            index,
            field: "surface_color",
        });
    }
    if !sphere.emission_color.is_finite() {
        return Err(SceneError::NonFinite {
            index,
            field: "emission_color",
        });
    }
    for (field, value) in [
        ("transparency", sphere.transparency),
        ("reflection", sphere.reflection),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SceneError::OutOfRange { index, field, value });
        }
    }
    Ok(())
}
