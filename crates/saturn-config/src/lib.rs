//! Configuration for the Saturn renderer.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. Missing sections and fields fall back to the stock
//! scene.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BodyMode, CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, DisplayConfig, MAX_DISPLAY_SIZE, MAX_ORBIT_RADIUS,
    MAX_SURFACE_PIXELS, PlanetConfig, RingBand, RingsConfig, StarfieldConfig,
};
pub use error::ConfigError;
