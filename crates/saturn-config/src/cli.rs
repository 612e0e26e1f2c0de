//! Command-line argument parsing for the Saturn renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::{BodyMode, Config};

/// Saturn command-line arguments.
///
/// Scene values override settings loaded from `config.ron`; the remaining
/// flags control the run itself.
#[derive(Parser, Debug, Default)]
#[command(name = "saturn", about = "Ringed planet on a simulated 128x64 monochrome display")]
pub struct CliArgs {
    /// Display width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Display height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Presentation upscale factor.
    #[arg(long)]
    pub scale: Option<u32>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seconds per orbit revolution.
    #[arg(long)]
    pub period: Option<u32>,

    /// Number of background stars.
    #[arg(long)]
    pub stars: Option<u32>,

    /// Starfield seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Planet body rendering mode.
    #[arg(long, value_enum)]
    pub body: Option<BodyMode>,

    /// Stop after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Write frames as PNG files instead of drawing to the terminal. Without
    /// a value, frames go to the platform snapshot directory.
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub snapshot_dir: Option<Option<PathBuf>>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.display.width = w;
        }
        if let Some(h) = args.height {
            self.display.height = h;
        }
        if let Some(scale) = args.scale {
            self.display.scale = scale;
        }
        if let Some(fps) = args.fps {
            self.camera.target_fps = fps;
        }
        if let Some(period) = args.period {
            self.camera.rotation_period_seconds = period;
        }
        if let Some(count) = args.stars {
            self.starfield.count = count;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = Some(seed);
        }
        if let Some(mode) = args.body {
            self.planet.body_mode = mode;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
