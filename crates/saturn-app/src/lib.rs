//! Saturn application shell.
//!
//! Resolves directories, loads configuration, and drives the scene through a
//! fixed-timestep loop into a terminal or PNG presenter.

pub mod app;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod present;
pub mod surface;
pub mod terminal;

pub use app::{Pacing, SceneScalar, run, run_frames, scene_settings};
pub use error::AppError;
pub use present::{PngSnapshots, Present};
pub use surface::ScaledSurface;
pub use terminal::TerminalPresenter;
