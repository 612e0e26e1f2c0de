//! Application error types.

use std::io;
use std::path::PathBuf;

use saturn_config::ConfigError;

use crate::platform::PlatformError;

/// Startup and presentation failures. The renderer itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Setting up, drawing to, or restoring the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),

    /// PNG encoding of a frame failed.
    #[error("failed to encode frame: {0}")]
    Encode(#[from] png::EncodingError),

    /// The upscaled snapshot image would not fit in memory.
    #[error("snapshot surface {width}x{height} at scale {scale} is too large")]
    SurfaceTooLarge { width: u32, height: u32, scale: u32 },

    /// A snapshot file could not be created.
    #[error("failed to write snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
