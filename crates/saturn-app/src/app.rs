//! Startup sequence and the frame loop tying the scene to a presenter.

use std::path::PathBuf;

use saturn_config::{BodyMode as ConfigBodyMode, CliArgs, Config};
use saturn_math::Scalar;
use saturn_space::{BodyMode, Scene, SceneSettings};
use tracing::info;

use crate::error::AppError;
use crate::game_loop::GameLoop;
use crate::platform::PlatformDirs;
use crate::present::{PngSnapshots, Present};
use crate::terminal::TerminalPresenter;

/// Scalar type the renderer is built with.
#[cfg(not(feature = "float"))]
pub type SceneScalar = saturn_math::Fixed;
/// Scalar type the renderer is built with.
#[cfg(feature = "float")]
pub type SceneScalar = f32;

/// How frames are paced against the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Wall-clock fixed timestep at `target_fps`.
    RealTime { fps: u32 },
    /// One orbit step per frame, as fast as the presenter accepts them.
    Stepped,
}

/// Scene parameters from a validated config.
pub fn scene_settings(config: &Config, star_seed: u64) -> SceneSettings {
    SceneSettings {
        width: config.display.width,
        height: config.display.height,
        body_radius: config.planet.radius,
        body_mode: match config.planet.body_mode {
            ConfigBodyMode::Disc => BodyMode::Disc,
            ConfigBodyMode::PointCloud => BodyMode::PointCloud,
        },
        rings: config
            .rings
            .bands
            .iter()
            .map(|band| (band.inner, band.outer))
            .collect(),
        ring_tilt_degrees: config.rings.tilt_degrees,
        ring_angular_step_degrees: config.rings.angular_step_degrees,
        ring_radial_step: config.rings.radial_step,
        orbit_radius: config.camera.orbit_radius,
        rotation_period_seconds: config.camera.rotation_period_seconds,
        target_fps: config.camera.target_fps,
        projection_distance: config.camera.projection_distance,
        star_count: config.starfield.count,
        star_half_extent: config.starfield.half_extent,
        star_min_distance: config.starfield.min_distance,
        star_seed,
    }
}

/// The configured starfield seed, or a fresh random one.
pub fn resolve_seed(config: &Config) -> u64 {
    config.starfield.seed.unwrap_or_else(rand::random)
}

/// Render and present frames until the presenter asks to quit or
/// `frame_limit` frames have been shown. Returns the number of frames
/// presented.
pub fn run_frames<S: Scalar, P: Present>(
    scene: &mut Scene<S>,
    presenter: &mut P,
    pacing: Pacing,
    frame_limit: Option<u64>,
) -> Result<u64, AppError> {
    let mut presented = 0;
    let limit_reached = |presented: u64| frame_limit.is_some_and(|limit| presented >= limit);

    match pacing {
        Pacing::Stepped => {
            while !limit_reached(presented) && !presenter.quit_requested()? {
                if presented > 0 {
                    scene.advance();
                }
                scene.render_frame();
                presenter.present(scene.framebuffer())?;
                presented += 1;
            }
        }
        Pacing::RealTime { fps } => {
            let mut game_loop = GameLoop::new(fps);
            while !limit_reached(presented) && !presenter.quit_requested()? {
                for _ in 0..game_loop.tick() {
                    scene.advance();
                }
                scene.render_frame();
                presenter.present(scene.framebuffer())?;
                presented += 1;
                std::thread::sleep(game_loop.time_until_next_update());
            }
        }
    }

    Ok(presented)
}

/// Full startup: directories, config, logging, scene, then the frame loop.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    let mut dirs = PlatformDirs::resolve()?;
    if let Some(config_dir) = args.config.clone() {
        dirs = dirs.with_config_dir(config_dir);
    }
    dirs.create_dirs()?;

    let config_path = Config::path_in(&dirs.config_dir);
    let config_existed = config_path.exists();
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&args);
    config.validate()?;

    saturn_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    if config_existed {
        info!("Loaded config from {}", config_path.display());
    } else {
        info!("Created default config at {}", config_path.display());
    }

    let seed = resolve_seed(&config);
    info!(
        "Saturn {}x{} at {} fps, body {:?}, starfield seed {} ({} arithmetic)",
        config.display.width,
        config.display.height,
        config.camera.target_fps,
        config.planet.body_mode,
        seed,
        std::any::type_name::<SceneScalar>()
    );

    let mut scene = Scene::<SceneScalar>::new(&scene_settings(&config, seed));

    let presented = match args.snapshot_dir {
        Some(dir) => {
            let dir: PathBuf = dir.unwrap_or_else(|| dirs.snapshot_dir.clone());
            info!("Writing snapshots to {}", dir.display());
            let mut snapshots = PngSnapshots::new(
                &dir,
                config.display.width,
                config.display.height,
                config.display.scale,
            )?;
            run_frames(&mut scene, &mut snapshots, Pacing::Stepped, args.frames)?
        }
        None => {
            let mut terminal = TerminalPresenter::new()?;
            let result = run_frames(
                &mut scene,
                &mut terminal,
                Pacing::RealTime {
                    fps: config.camera.target_fps,
                },
                args.frames,
            );
            terminal.restore().map_err(AppError::Terminal)?;
            result?
        }
    };

    info!("Presented {} frames", presented);
    Ok(())
}
