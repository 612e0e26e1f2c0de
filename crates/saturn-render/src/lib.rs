//! Monochrome rasterization: the bit-packed display framebuffer, the look-at
//! camera transform, and the perspective projector.

pub mod camera;
pub mod framebuffer;
pub mod projector;

pub use camera::{LookAt, transform_point_look_at};
pub use framebuffer::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Framebuffer};
pub use projector::{Projector, project_point};
