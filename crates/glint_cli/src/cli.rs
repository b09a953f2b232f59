use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "A small Whitted-style sphere ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480", help = "Image height in pixels")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "30.0", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Maximum recursion depth for reflection/refraction rays
    #[arg(long, default_value = "5", help = "Maximum recursion depth")]
    pub max_depth: u32,

    /// Tile grid rows
    #[arg(long, default_value = "2", help = "Tile grid rows")]
    pub tile_rows: u32,

    /// Tile grid columns
    #[arg(long, default_value = "2", help = "Tile grid columns")]
    pub tile_cols: u32,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value = "1", help = "Number of frames to render")]
    pub frames: u32,

    /// Directory frames are written into
    #[arg(short, long, default_value = ".", help = "Directory frames are written into")]
    pub output_dir: PathBuf,

    /// Output image format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ppm, help = "Output image format")]
    pub format: OutputFormat,

    /// Scene description file (JSON); the built-in demo scene is used when omitted
    #[arg(long, help = "Scene description file (JSON)")]
    pub scene: Option<PathBuf>,

    /// Render tiles sequentially on the calling thread
    #[arg(long, help = "Render tiles sequentially on the calling thread")]
    pub sequential: bool,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
