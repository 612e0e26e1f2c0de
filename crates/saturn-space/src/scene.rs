//! The render context: every piece of per-run state needed to draw a frame.

use saturn_math::{Point3, Scalar};
use saturn_render::{Framebuffer, LookAt, Projector};

use crate::body::{BodyMode, draw_body};
use crate::orbit::OrbitController;
use crate::rings::{RingSpec, RingSteps, draw_ring};
use crate::starfield::StarfieldGenerator;

/// Scene parameters in whole world units, fixed for the lifetime of a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSettings {
    pub width: u32,
    pub height: u32,
    pub body_radius: i32,
    pub body_mode: BodyMode,
    /// `(inner, outer)` radius of each ring band.
    pub rings: Vec<(i32, i32)>,
    pub ring_tilt_degrees: i32,
    pub ring_angular_step_degrees: u32,
    pub ring_radial_step: i32,
    pub orbit_radius: i32,
    pub rotation_period_seconds: u32,
    pub target_fps: u32,
    pub projection_distance: i32,
    pub star_count: u32,
    pub star_half_extent: i32,
    pub star_min_distance: i32,
    pub star_seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: saturn_render::DISPLAY_WIDTH,
            height: saturn_render::DISPLAY_HEIGHT,
            body_radius: 20,
            body_mode: BodyMode::Disc,
            rings: vec![(18, 20), (22, 24), (26, 28)],
            ring_tilt_degrees: 27,
            ring_angular_step_degrees: 3,
            ring_radial_step: 1,
            orbit_radius: 70,
            rotation_period_seconds: 20,
            target_fps: 30,
            projection_distance: 80,
            star_count: 100,
            star_half_extent: 200,
            star_min_distance: 50,
            star_seed: 0,
        }
    }
}

/// Starfield lifecycle. Stars are generated lazily on the first rendered
/// frame and never regenerated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum StarfieldState<S> {
    Uninitialized(StarfieldGenerator),
    Initialized(Vec<Point3<S>>),
}

impl<S: Scalar> StarfieldState<S> {
    fn ensure_initialized(&mut self) -> &[Point3<S>] {
        if let StarfieldState::Uninitialized(generator) = self {
            *self = StarfieldState::Initialized(generator.generate());
        }
        match self {
            StarfieldState::Initialized(stars) => stars.as_slice(),
            StarfieldState::Uninitialized(_) => &[],
        }
    }
}

/// A ringed planet seen from an orbiting camera, rendered into a
/// monochrome framebuffer.
///
/// Frames are composed in a fixed order: clear, stars, body, rings. Later
/// layers are OR-ed over earlier ones.
pub struct Scene<S> {
    framebuffer: Framebuffer,
    projector: Projector<S>,
    orbit: OrbitController<S>,
    starfield: StarfieldState<S>,
    rings: Vec<RingSpec<S>>,
    ring_steps: RingSteps<S>,
    ring_tilt: S,
    body_radius: S,
    body_mode: BodyMode,
    orbit_radius: S,
    frame_count: u64,
}

impl<S: Scalar> Scene<S> {
    pub fn new(settings: &SceneSettings) -> Self {
        let generator = StarfieldGenerator::new(
            settings.star_seed,
            settings.star_count,
            settings.star_half_extent,
            settings.star_min_distance,
        );
        Self {
            framebuffer: Framebuffer::new(settings.width, settings.height),
            projector: Projector::new(
                S::from_int(settings.projection_distance),
                settings.width,
                settings.height,
            ),
            orbit: OrbitController::new(settings.rotation_period_seconds, settings.target_fps),
            starfield: StarfieldState::Uninitialized(generator),
            rings: settings
                .rings
                .iter()
                .map(|&(inner, outer)| RingSpec::from_ints(inner, outer))
                .collect(),
            ring_steps: RingSteps {
                angular_degrees: settings.ring_angular_step_degrees,
                radial: S::from_int(settings.ring_radial_step),
            },
            ring_tilt: S::from_degrees(settings.ring_tilt_degrees),
            body_radius: S::from_int(settings.body_radius),
            body_mode: settings.body_mode,
            orbit_radius: S::from_int(settings.orbit_radius),
            frame_count: 0,
        }
    }

    /// Render one frame at the current orbit angle.
    pub fn render_frame(&mut self) {
        self.framebuffer.clear();

        let camera = self.orbit.camera_position(self.orbit_radius);
        let view = LookAt::new(camera, Point3::zero());

        let stars = self.starfield.ensure_initialized();
        let stars_lit = stars
            .iter()
            .filter(|&&star| self.projector.plot(&mut self.framebuffer, &view, star))
            .count();

        let body_lit = draw_body(
            &mut self.framebuffer,
            &self.projector,
            &view,
            self.body_radius,
            self.orbit_radius,
            self.body_mode,
        );

        let mut ring_lit = 0;
        for &ring in &self.rings {
            ring_lit += draw_ring(
                &mut self.framebuffer,
                &self.projector,
                &view,
                ring,
                self.ring_steps,
                self.ring_tilt,
            );
        }

        self.frame_count += 1;
        log::trace!(
            "Frame {}: angle {}, {} stars, {} body, {} ring pixels",
            self.frame_count,
            self.orbit.angle(),
            stars_lit,
            body_lit,
            ring_lit
        );
    }

    /// Advance the orbit by one frame without rendering.
    pub fn advance(&mut self) {
        self.orbit.advance();
    }

    /// Advance the orbit, then render.
    pub fn step(&mut self) {
        self.advance();
        self.render_frame();
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Generated stars, empty until the first frame is rendered.
    pub fn stars(&self) -> &[Point3<S>] {
        match &self.starfield {
            StarfieldState::Initialized(stars) => stars.as_slice(),
            StarfieldState::Uninitialized(_) => &[],
        }
    }

    pub fn is_starfield_initialized(&self) -> bool {
        matches!(self.starfield, StarfieldState::Initialized(_))
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn orbit(&self) -> &OrbitController<S> {
        &self.orbit
    }

    pub fn camera_position(&self) -> Point3<S> {
        self.orbit.camera_position(self.orbit_radius)
    }
}
