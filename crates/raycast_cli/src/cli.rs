use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Render diffuse spheres under a point light by ray casting
#[derive(Debug, Parser)]
#[command(name = "raycast", version)]
pub struct Args {
    /// JSON scene file (built-in three-sphere scene if omitted)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Field of view in degrees (overrides the scene file)
    #[arg(long)]
    pub fov: Option<f32>,

    /// Output file (.ppm, .png, .jpg, .bmp or .tga)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Render buckets in parallel on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Bucket size in pixels for parallel rendering
    #[arg(long, default_value_t = raycast_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Logging level (RUST_LOG is also honored)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
