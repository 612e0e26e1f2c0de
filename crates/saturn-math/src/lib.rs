//! Numeric kernel and vector algebra for the Saturn renderer.
//!
//! Everything above this crate is generic over [`Scalar`], which is implemented
//! for the Q16.16 [`Fixed`] type and for native `f32`.

mod fixed_point;
mod scalar;
mod vector;

pub use fixed_point::{FRAC_BITS, Fixed, SIN_TABLE_SIZE};
pub use scalar::Scalar;
pub use vector::{Point2, Point3};
