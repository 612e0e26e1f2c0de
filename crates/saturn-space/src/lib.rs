//! The ringed-planet scene: starfield, planet body, ring bands and the
//! orbiting camera, composed each frame into a monochrome framebuffer.

pub mod body;
pub mod orbit;
pub mod rings;
pub mod scene;
pub mod starfield;


pub use body::{BodyMode, POINT_CLOUD_STEP_DEGREES, draw_body};
pub use orbit::OrbitController;
pub use rings::{RingSpec, RingSteps, draw_ring, ring_point_count, ring_points};
pub use scene::{Scene, SceneSettings, StarfieldState};
pub use starfield::StarfieldGenerator;
