//! Look-at camera transform from world space into camera space.

use saturn_math::{Point3, Scalar};

/// Orthonormal camera basis built from an eye position and a target.
///
/// Camera space is right-handed with `x` along [`right`](Self::right), `y`
/// along [`up`](Self::up) and `z` along [`forward`](Self::forward), so depth
/// grows away from the eye. Build a fresh basis whenever the eye or target
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt<S> {
    /// Eye position in world space.
    pub eye: Point3<S>,
    /// Unit direction from eye to target; +Z when the two coincide.
    pub forward: Point3<S>,
    pub right: Point3<S>,
    pub up: Point3<S>,
}

impl<S: Scalar> LookAt<S> {
    /// Build the basis for a camera at `eye` looking at `target`.
    ///
    /// `right = normalize(forward × world_up)` with `world_up = +Y`. When the
    /// camera looks straight along ±Y the cross product vanishes and `right`
    /// is left as the (zero) unnormalized vector.
    pub fn new(eye: Point3<S>, target: Point3<S>) -> Self {
        let forward = (target - eye).normalize_or(Point3::unit_z());
        let world_up = Point3::unit_y();

        let right_raw = forward.cross(world_up);
        let right = right_raw.normalize_or(right_raw);

        let up = right.cross(forward);

        Self {
            eye,
            forward,
            right,
            up,
        }
    }

    /// Map a world point into camera space: `(right, up, forward)` components
    /// of the point relative to the eye.
    pub fn to_camera_space(&self, point: Point3<S>) -> Point3<S> {
        let relative = point - self.eye;
        Point3::new(
            relative.dot(self.right),
            relative.dot(self.up),
            relative.dot(self.forward),
        )
    }
}

/// One-shot look-at transform; rebuilds the basis on every call.
pub fn transform_point_look_at<S: Scalar>(
    point: Point3<S>,
    camera: Point3<S>,
    target: Point3<S>,
) -> Point3<S> {
    LookAt::new(camera, target).to_camera_space(point)
}
