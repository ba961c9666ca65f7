use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "sunshine")]
#[command(about = "Real-time recursive ray tracer over an animated sphere scene")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Frame width in pixels
    #[arg(long, default_value = "1280", help = "Frame width in pixels")]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value = "720", help = "Frame height in pixels")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "60.0", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Number of spheres in the generated scene
    #[arg(long, default_value = "8", help = "Number of spheres in the generated scene")]
    pub spheres: usize,

    /// Number of point lights in the generated scene
    #[arg(long, default_value = "2", help = "Number of point lights in the generated scene")]
    pub lights: usize,

    /// Number of render workers per frame
    #[arg(long, short = 'w', default_value = "8", help = "Number of render workers per frame")]
    pub workers: usize,

    /// Maximum reflection recursion depth
    #[arg(long, default_value = "5", help = "Maximum reflection recursion depth")]
    pub max_depth: u32,

    /// Reflection attenuation base in (0, 1)
    #[arg(long, default_value = "0.6", help = "Reflection attenuation base in (0, 1)")]
    pub decay: f32,

    /// Number of frames to render
    #[arg(long, short = 'n', default_value = "120", help = "Number of frames to render")]
    pub frames: u64,

    /// Reverse sphere travel direction every this many frames
    #[arg(long, default_value = "200", help = "Reverse sphere travel direction every this many frames")]
    pub toggle_interval: u64,

    /// Seed for scene generation (random when omitted)
    #[arg(long, help = "Seed for scene generation (random when omitted)")]
    pub seed: Option<u64>,

    /// Write the final frame as a PNG to this path
    #[arg(short, long, help = "Write the final frame as a PNG to this path")]
    pub output: Option<String>,
}
