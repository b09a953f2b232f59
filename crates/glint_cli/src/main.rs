//! Glint command line renderer.
//!
//! Renders a frame sequence of the demo scene (or a JSON scene file)
//! and writes each finished frame from a background thread while the
//! next one renders.

mod cli;
mod demo;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use cli::{Args, OutputFormat};
use glint_render::{
    render, render_sequential, write_png, write_ppm, Framebuffer, RenderConfig, TraceOptions,
};
use glint_scene::load_scene;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        fov_degrees: args.fov,
        tile_rows: args.tile_rows,
        tile_cols: args.tile_cols,
        trace: TraceOptions {
            max_depth: args.max_depth,
            ..TraceOptions::default()
        },
    };

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output dir {}", args.output_dir.display()))?;

    let file_scene = match &args.scene {
        Some(path) => Some(
            load_scene(path).with_context(|| format!("loading scene {}", path.display()))?,
        ),
        None => None,
    };

    // Finished frames are written out on background threads; handles are
    // joined before exit so no frame is lost.
    let mut writers = Vec::new();

    for frame in 0..args.frames {
        let scene = match &file_scene {
            Some(scene) => scene.clone(),
            None => demo::demo_scene(frame).context("building demo scene")?,
        };

        let start = Instant::now();
        let image = if args.sequential {
            render_sequential(&scene, &config)
        } else {
            render(&scene, &config)
        };
        info!(
            "frame {frame} rendered in {:.2?} ({}x{}, {} spheres)",
            start.elapsed(),
            config.width,
            config.height,
            scene.len()
        );

        let path = frame_path(&args.output_dir, frame, args.format);
        writers.push(spawn_writer(path, image, args.format));
    }

    for writer in writers {
        if writer.join().is_err() {
            error!("frame writer thread panicked");
        }
    }

    Ok(())
}

/// Zero-padded frame filename, e.g. `spheres0042.ppm`.
fn frame_path(dir: &Path, frame: u32, format: OutputFormat) -> PathBuf {
    dir.join(format!("spheres{frame:04}.{}", format.extension()))
}

/// Hand a finished framebuffer to a background writer thread.
///
/// The buffer moves into the thread, so the next render call cannot
/// touch it. Write failures are logged, not propagated, so later frames
/// keep rendering.
fn spawn_writer(
    path: PathBuf,
    image: Framebuffer,
    format: OutputFormat,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let result = match format {
            OutputFormat::Ppm => write_ppm(&path, &image),
            OutputFormat::Png => write_png(&path, &image),
        };
        match result {
            Ok(()) => info!("wrote {}", path.display()),
            Err(err) => error!("failed to write {}: {err}", path.display()),
        }
    })
}
