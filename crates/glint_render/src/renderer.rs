//! Render dispatch.
//!
//! Partitions the image into tiles, renders them concurrently on the
//! rayon pool (or sequentially on the calling thread), and reassembles
//! the results into one contiguous framebuffer. Each tile task writes
//! only its own tile-local buffer, so the shared scene needs no locks
//! and the framebuffer is touched by exactly one thread.

use glint_math::Vec3;
use glint_scene::Scene;
use rayon::prelude::*;

use crate::{render_tile, tiles, Camera, Tile, TraceOptions};

/// Render configuration.
///
/// All parameters are explicit call-time values; nothing is a compiled-in
/// constant, so tests can render at any resolution.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Tile grid rows
    pub tile_rows: u32,
    /// Tile grid columns
    pub tile_cols: u32,
    /// Per-ray tracer tunables (depth cap, background, bias, ior)
    pub trace: TraceOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov_degrees: 30.0,
            tile_rows: 2,
            tile_cols: 2,
            trace: TraceOptions::default(),
        }
    }
}

/// Flat row-major buffer of pixel colors.
///
/// A fresh one is allocated per render call and handed to the output
/// sink by value, so a pending write-out can never race the next render.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a tile's row-major pixels into the tile's rectangle.
    pub fn blit(&mut self, tile: &Tile, pixels: &[Vec3]) {
        debug_assert_eq!(pixels.len(), tile.pixel_count() as usize);
        let width = tile.width as usize;
        for local_y in 0..tile.height {
            let src = (local_y * tile.width) as usize;
            let dst = ((tile.y + local_y) * self.width + tile.x) as usize;
            self.pixels[dst..dst + width].copy_from_slice(&pixels[src..src + width]);
        }
    }
}

/// Render the scene across the rayon pool, one task per tile.
///
/// The tile partition is computed once before the fan-out; the join
/// happens inside `collect`, after which the assembled framebuffer is
/// final.
pub fn render(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let camera = Camera::new(config.width, config.height, config.fov_degrees);
    let grid = tiles(config.width, config.height, config.tile_rows, config.tile_cols);
    log::debug!(
        "rendering {}x{} across {} tiles ({} spheres)",
        config.width,
        config.height,
        grid.len(),
        scene.len()
    );

    let results: Vec<Vec<Vec3>> = grid
        .par_iter()
        .map(|tile| render_tile(tile, &camera, scene, &config.trace))
        .collect();

    assemble(config, &grid, results)
}

/// Render every tile in order on the calling thread.
///
/// The deterministic fallback: it shares the per-tile path with
/// [`render`] and produces an identical framebuffer.
pub fn render_sequential(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let camera = Camera::new(config.width, config.height, config.fov_degrees);
    let grid = tiles(config.width, config.height, config.tile_rows, config.tile_cols);

    let results: Vec<Vec<Vec3>> = grid
        .iter()
        .map(|tile| render_tile(tile, &camera, scene, &config.trace))
        .collect();

    assemble(config, &grid, results)
}

fn assemble(config: &RenderConfig, grid: &[Tile], results: Vec<Vec<Vec3>>) -> Framebuffer {
    let mut image = Framebuffer::new(config.width, config.height);
    for (tile, pixels) in grid.iter().zip(&results) {
        image.blit(tile, pixels);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_scene::Sphere;

    fn test_scene() -> Scene {
        Scene::new(vec![
            Sphere::new(Vec3::new(0.0, -10004.0, -20.0), 10000.0, Vec3::splat(0.2)),
            Sphere::new(Vec3::new(0.0, 0.0, -20.0), 4.0, Vec3::new(1.0, 0.32, 0.36))
                .with_reflection(1.0)
                .with_transparency(0.5),
            Sphere::new(Vec3::new(5.0, -1.0, -15.0), 2.0, Vec3::new(0.9, 0.76, 0.46))
                .with_reflection(1.0),
            Sphere::new(Vec3::new(0.0, 20.0, -30.0), 3.0, Vec3::ZERO)
                .with_emission(Vec3::splat(3.0)),
        ])
        .unwrap()
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 48,
            height: 36,
            tile_rows: 2,
            tile_cols: 3,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_framebuffer_blit() {
        let mut image = Framebuffer::new(4, 4);
        let tile = Tile {
            x: 1,
            y: 2,
            width: 2,
            height: 2,
            index: 0,
        };
        image.blit(&tile, &[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE]);

        assert_eq!(image.get(1, 2), Vec3::X);
        assert_eq!(image.get(2, 2), Vec3::Y);
        assert_eq!(image.get(1, 3), Vec3::Z);
        assert_eq!(image.get(2, 3), Vec3::ONE);
        // Untouched pixels stay black
        assert_eq!(image.get(0, 0), Vec3::ZERO);
        assert_eq!(image.get(3, 3), Vec3::ZERO);
    }

    #[test]
    fn test_sequential_render_is_deterministic() {
        let scene = test_scene();
        let config = small_config();

        let first = render_sequential(&scene, &config);
        let second = render_sequential(&scene, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = test_scene();
        let config = small_config();

        let parallel = render(&scene, &config);
        let sequential = render_sequential(&scene, &config);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_tile_grid_does_not_change_output() {
        let scene = test_scene();
        let base = small_config();

        let reference = render_sequential(&scene, &base);
        for (rows, cols) in [(1, 1), (4, 4), (3, 5)] {
            let config = RenderConfig {
                tile_rows: rows,
                tile_cols: cols,
                ..base.clone()
            };
            assert_eq!(render(&scene, &config), reference);
        }
    }

    #[test]
    fn test_single_sphere_scenario() {
        // Unlit red sphere dead ahead: rays that hit shade to black,
        // rays that miss return the background exactly.
        let scene = Scene::new(vec![Sphere::new(
            Vec3::new(0.0, 0.0, -4.0),
            1.0,
            Vec3::new(1.0, 0.0, 0.0),
        )])
        .unwrap();
        let config = RenderConfig {
            width: 16,
            height: 12,
            ..RenderConfig::default()
        };

        let image = render_sequential(&scene, &config);

        assert_eq!(image.get(8, 6), Vec3::ZERO);
        assert_eq!(image.get(0, 0), config.trace.background);
        assert_eq!(image.get(15, 11), config.trace.background);
    }

    #[test]
    fn test_each_render_allocates_fresh_buffer() {
        let scene = test_scene();
        let config = small_config();

        let first = render(&scene, &config);
        let second = render(&scene, &config);
        assert!(!std::ptr::eq(first.pixels.as_ptr(), second.pixels.as_ptr()));
    }
}
