//! Glint renderer - CPU Whitted ray tracing.
//!
//! Recursive ray tracing over a sphere scene: primary rays per pixel,
//! secondary rays for specular reflection, dielectric refraction, and
//! hard shadows from emissive spheres. The image plane is partitioned
//! into a grid of tiles rendered in parallel and reassembled into one
//! contiguous framebuffer.

mod camera;
mod output;
mod renderer;
mod tile;
mod tracer;

pub use camera::Camera;
pub use output::{ppm_bytes, to_rgb_bytes, write_png, write_ppm, OutputError};
pub use renderer::{render, render_sequential, Framebuffer, RenderConfig};
pub use tile::{render_tile, tiles, Tile};
pub use tracer::{trace, TraceOptions};

/// Re-export the math and scene types renderer callers need.
pub use glint_math::{Ray, Vec3};
pub use glint_scene::{Scene, Sphere};
