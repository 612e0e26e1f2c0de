//! Configuration structs with the stock scene as defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted config.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Largest orbit radius whose squared length still fits the fixed-point range.
pub const MAX_ORBIT_RADIUS: i32 = 181;

/// Largest display width or height. Half of it must stay a Q16.16 integer.
pub const MAX_DISPLAY_SIZE: u32 = 32_767;

/// Pixel budget of the upscaled snapshot surface (256 MiB of RGBA8).
pub const MAX_SURFACE_PIXELS: u64 = 1 << 26;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Simulated display settings.
    pub display: DisplayConfig,
    /// Planet body settings.
    pub planet: PlanetConfig,
    /// Ring band settings.
    pub rings: RingsConfig,
    /// Orbit camera and projection settings.
    pub camera: CameraConfig,
    /// Background star settings.
    pub starfield: StarfieldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulated display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Integer upscale factor for presentation.
    pub scale: u32,
}

/// How the planet body is drawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum BodyMode {
    /// Filled disc.
    #[default]
    Disc,
    /// Latitude/longitude point cloud.
    PointCloud,
}

/// Planet body configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Body radius in world units.
    pub radius: i32,
    pub body_mode: BodyMode,
}

/// One ring band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingBand {
    pub inner: i32,
    pub outer: i32,
}

/// Ring configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RingsConfig {
    pub bands: Vec<RingBand>,
    /// Tilt about the X axis in degrees.
    pub tilt_degrees: i32,
    /// Angular sampling step in degrees.
    pub angular_step_degrees: u32,
    /// Radial sampling step in world units.
    pub radial_step: i32,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the planet center in world units.
    pub orbit_radius: i32,
    /// Seconds per full revolution.
    pub rotation_period_seconds: u32,
    /// Frames per second; also the orbit update rate.
    pub target_fps: u32,
    /// Eye to projection plane distance in world units.
    pub projection_distance: i32,
}

/// Starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: u32,
    /// Stars are placed in the cube `[-half_extent, half_extent)³`.
    pub half_extent: i32,
    /// Minimum star distance from the planet center.
    pub min_distance: i32,
    /// Fixed seed for reproducible runs. A random seed is drawn when absent.
    pub seed: Option<u64>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            scale: 8,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 20,
            body_mode: BodyMode::Disc,
        }
    }
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            bands: vec![
                RingBand {
                    inner: 18,
                    outer: 20,
                },
                RingBand {
                    inner: 22,
                    outer: 24,
                },
                RingBand {
                    inner: 26,
                    outer: 28,
                },
            ],
            tilt_degrees: 27,
            angular_step_degrees: 3,
            radial_step: 1,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 70,
            rotation_period_seconds: 20,
            target_fps: 30,
            projection_distance: 80,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            half_extent: 200,
            min_distance: 50,
            seed: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::path_in(config_dir);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            ron::from_str(&contents).map_err(ConfigError::ParseError)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok(config)
        }
    }

    /// Location of the config file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = Self::path_in(config_dir);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        let size_range = format!("must be in 1..={MAX_DISPLAY_SIZE}");
        check(
            (1..=MAX_DISPLAY_SIZE).contains(&display.width),
            "display.width",
            &size_range,
        )?;
        check(
            (1..=MAX_DISPLAY_SIZE).contains(&display.height),
            "display.height",
            &size_range,
        )?;
        check(display.scale > 0, "display.scale", "must be positive")?;
        let scale = u64::from(display.scale);
        let surface_pixels = (u64::from(display.width) * scale)
            .checked_mul(u64::from(display.height) * scale);
        check(
            surface_pixels.is_some_and(|pixels| pixels <= MAX_SURFACE_PIXELS),
            "display.scale",
            &format!("scaled display exceeds {MAX_SURFACE_PIXELS} pixels"),
        )?;

        check(self.planet.radius >= 0, "planet.radius", "must not be negative")?;

        let rings = &self.rings;
        check(
            rings.angular_step_degrees > 0,
            "rings.angular_step_degrees",
            "must be positive",
        )?;
        check(rings.radial_step > 0, "rings.radial_step", "must be positive")?;
        for (i, band) in rings.bands.iter().enumerate() {
            check(band.inner >= 0, "rings.bands", &format!("band {i} has a negative inner radius"))?;
            check(
                band.inner <= band.outer,
                "rings.bands",
                &format!("band {i} has inner {} > outer {}", band.inner, band.outer),
            )?;
        }

        let camera = &self.camera;
        check(
            camera.orbit_radius > 0 && camera.orbit_radius <= MAX_ORBIT_RADIUS,
            "camera.orbit_radius",
            &format!("must be in 1..={MAX_ORBIT_RADIUS}"),
        )?;
        check(
            camera.rotation_period_seconds > 0,
            "camera.rotation_period_seconds",
            "must be positive",
        )?;
        check(camera.target_fps > 0, "camera.target_fps", "must be positive")?;
        check(
            camera.projection_distance > 0,
            "camera.projection_distance",
            "must be positive",
        )?;

        let stars = &self.starfield;
        check(stars.half_extent > 0, "starfield.half_extent", "must be positive")?;
        check(stars.min_distance >= 0, "starfield.min_distance", "must not be negative")?;
        check(
            stars.min_distance <= stars.half_extent,
            "starfield.min_distance",
            "must not exceed starfield.half_extent",
        )?;

        Ok(())
    }
}

fn check(condition: bool, field: &'static str, reason: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: reason.to_string(),
        })
    }
}
