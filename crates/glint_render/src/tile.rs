//! Tile partitioning for the parallel dispatcher.
//!
//! The image plane is divided into a fixed rows x cols grid of
//! rectangular tiles. Tiles are disjoint and their union covers the
//! image exactly, which is what makes lock-free framebuffer assembly
//! sound: every pixel has exactly one owning task.

use glint_math::Vec3;
use glint_scene::Scene;

use crate::{trace, Camera, TraceOptions};

/// A rectangular region of the image owned by one render task.
///
/// Half-open in both axes: pixels `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's left edge
    pub x: u32,
    /// Y coordinate of the tile's top edge
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in the grid, row-major
    pub index: usize,
}

impl Tile {
    /// Total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Partition an image into a rows x cols grid of tiles.
///
/// Boundaries are proportional (`x0 = c * width / cols`), so the grid
/// covers any image size exactly with no gaps or overlaps, including
/// dimensions the grid does not divide evenly. A grid larger than the
/// image yields some zero-area tiles, which render to nothing.
pub fn tiles(width: u32, height: u32, rows: u32, cols: u32) -> Vec<Tile> {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut tiles = Vec::with_capacity((rows * cols) as usize);
    let mut index = 0;
    for r in 0..rows {
        let y0 = r * height / rows;
        let y1 = (r + 1) * height / rows;
        for c in 0..cols {
            let x0 = c * width / cols;
            let x1 = (c + 1) * width / cols;
            tiles.push(Tile {
                x: x0,
                y: y0,
                width: x1 - x0,
                height: y1 - y0,
                index,
            });
            index += 1;
        }
    }
    tiles
}

/// Render a single tile to a vector of colors.
///
/// Pixels come back in row-major order within the tile; the dispatcher
/// blits them into the framebuffer at the tile's rectangle.
pub fn render_tile(
    tile: &Tile,
    camera: &Camera,
    scene: &Scene,
    opts: &TraceOptions,
) -> Vec<Vec3> {
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);
    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let ray = camera.primary_ray(tile.x + local_x, tile.y + local_y);
            pixels.push(trace(&ray, scene, 0, opts));
        }
    }
    pixels
}
