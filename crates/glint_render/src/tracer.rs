//! Recursive Whitted-style shading.

use glint_math::{Ray, Vec3};
use glint_scene::Scene;

/// Tunables the tracer consults on every ray.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    /// Recursion cap for reflection/refraction rays.
    pub max_depth: u32,
    /// Color returned when a ray escapes the scene.
    pub background: Vec3,
    /// Offset along the normal for secondary ray origins, keeping them
    /// clear of the surface they start on.
    pub bias: f32,
    /// Index of refraction for transparent spheres.
    pub ior: f32,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Vec3::splat(2.0),
            bias: 1e-4,
            ior: 1.1,
        }
    }
}

/// mix(a, b, t) = b*t + a*(1-t)
#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    b * t + a * (1.0 - t)
}

/// Compute the color seen along a ray.
///
/// Finds the nearest intersection and shades it: specular surfaces
/// recurse into reflection and refraction rays blended by a fresnel
/// weight, diffuse surfaces (and any surface once `depth` reaches the
/// cap) gather direct light from emissive spheres under binary shadow
/// tests. The hit sphere's own emission is always added, so lights are
/// visible when viewed directly.
///
/// `ray.direction` must be unit length.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32, opts: &TraceOptions) -> Vec3 {
    debug_assert!(ray.direction.is_normalized());

    let Some(hit) = scene.nearest_hit(ray) else {
        return opts.background;
    };
    let sphere = hit.sphere;

    let p = ray.at(hit.t);
    let mut n = (p - sphere.center).normalize();
    // Normal and view direction on the same side means the ray started
    // inside the sphere; flip so the normal opposes the ray.
    let mut inside = false;
    if ray.direction.dot(n) > 0.0 {
        n = -n;
        inside = true;
    }

    let mut surface_color = Vec3::ZERO;
    if (sphere.transparency > 0.0 || sphere.reflection > 0.0) && depth < opts.max_depth {
        let facing_ratio = -ray.direction.dot(n);
        let fresnel = mix((1.0 - facing_ratio).powi(3), 1.0, 0.1);

        let refl_dir = (ray.direction - n * 2.0 * ray.direction.dot(n)).normalize();
        let refl_ray = Ray::new(p + n * opts.bias, refl_dir);
        let reflection = trace(&refl_ray, scene, depth + 1, opts);

        let mut refraction = Vec3::ZERO;
        if sphere.transparency > 0.0 {
            let eta = if inside { opts.ior } else { 1.0 / opts.ior };
            let cosi = -n.dot(ray.direction);
            let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
            // k < 0 is total internal reflection: no transmitted ray
            // exists, the reflection term already carries the energy.
            if k >= 0.0 {
                let refr_dir = (ray.direction * eta + n * (eta * cosi - k.sqrt())).normalize();
                let refr_ray = Ray::new(p - n * opts.bias, refr_dir);
                refraction = trace(&refr_ray, scene, depth + 1, opts);
            }
        }

        surface_color = (reflection * fresnel
            + refraction * (1.0 - fresnel) * sphere.transparency)
            * sphere.surface_color;
    } else {
        // Diffuse surface: gather direct light from every emitter.
        // Emitters themselves stay opaque occluders for other lights'
        // shadow rays; only the light being sampled is skipped.
        for (light_index, light) in scene.spheres().iter().enumerate() {
            if !light.is_emissive() {
                continue;
            }
            let light_dir = (light.center - p).normalize();
            let shadow_ray = Ray::new(p + n * opts.bias, light_dir);
            let occluded = scene
                .spheres()
                .iter()
                .enumerate()
                .any(|(j, other)| j != light_index && other.intersect(&shadow_ray).is_some());
            if !occluded {
                surface_color +=
                    sphere.surface_color * n.dot(light_dir).max(0.0) * light.emission_color;
            }
        }
    }

    surface_color + sphere.emission_color
}
