//! Scene representation for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Sphere**: the single geometric primitive, with its analytic
//!   ray intersection test
//! - **Scene**: an ordered, validated collection of spheres with the
//!   nearest-intersection query
//! - **Scene documents**: JSON descriptions loaded via serde
//!
//! A `Scene` is built once per frame and is read-only for the frame's
//! duration; every render worker shares it by reference.

mod loader;
mod scene;
mod sphere;

pub use loader::{load_scene, parse_scene, SceneDoc, SphereDoc};
pub use scene::{Hit, Scene, SceneError};
pub use sphere::Sphere;

/// Re-export the math types scene consumers need.
pub use glint_math::{Ray, Vec3};
