//! Perspective projection from camera space onto the display plane.

use saturn_math::{Point2, Point3, Scalar};

use crate::camera::LookAt;
use crate::framebuffer::Framebuffer;

/// Pinhole projector with a fixed projection distance.
///
/// `screen = camera_xy * distance / depth + center`. Points with depth ≤ 0
/// are behind the eye and never produce a screen coordinate. No clipping
/// against the screen edges happens here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector<S> {
    /// Distance from the eye to the projection plane, in world units.
    pub distance: S,
    /// Screen coordinate of the optical axis (`W/2`, `H/2`).
    pub center: Point2<S>,
}

impl<S: Scalar> Projector<S> {
    /// Projector for a `width × height` display, centered on the screen.
    pub fn new(distance: S, width: u32, height: u32) -> Self {
        Self {
            distance,
            center: Point2::new(
                S::from_int((width / 2) as i32),
                S::from_int((height / 2) as i32),
            ),
        }
    }

    /// Project a camera-space point. Returns `None` when `depth ≤ 0`.
    pub fn project_camera_space(&self, point: Point3<S>) -> Option<Point2<S>> {
        if point.z <= S::ZERO {
            return None;
        }
        let perspective = self.distance / point.z;
        Some(Point2::new(
            point.x * perspective + self.center.x,
            point.y * perspective + self.center.y,
        ))
    }

    /// Project a world point through `view`.
    pub fn project(&self, view: &LookAt<S>, point: Point3<S>) -> Option<Point2<S>> {
        self.project_camera_space(view.to_camera_space(point))
    }

    /// Project a world point straight to pixel indices, or `None` when it is
    /// behind the eye. The pixel may still be off-screen.
    pub fn project_to_pixel(&self, view: &LookAt<S>, point: Point3<S>) -> Option<(i32, i32)> {
        self.project(view, point).map(Point2::to_pixel)
    }

    /// Project a world point and light its pixel if it lands on the display.
    /// Returns whether a pixel was written.
    pub fn plot(&self, framebuffer: &mut Framebuffer, view: &LookAt<S>, point: Point3<S>) -> bool {
        match self.project_to_pixel(view, point) {
            Some((x, y)) if framebuffer.contains(x, y) => {
                framebuffer.set_pixel(x, y, true);
                true
            }
            _ => false,
        }
    }

    /// On-screen size of a world-space length seen at `distance`, truncated
    /// to whole pixels.
    pub fn apparent_size(&self, world_length: S, distance: S) -> i32 {
        let perspective = self.distance / distance;
        (world_length * perspective).floor_to_int()
    }
}

/// Project `point` for a camera at `camera` looking at `target`, returning
/// the legacy [`Point2::not_visible`] marker for points behind the camera.
pub fn project_point<S: Scalar>(
    projector: &Projector<S>,
    point: Point3<S>,
    camera: Point3<S>,
    target: Point3<S>,
) -> Point2<S> {
    projector
        .project(&LookAt::new(camera, target), point)
        .unwrap_or_else(Point2::not_visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturn_math::Fixed;

    fn projector<S: Scalar>() -> Projector<S> {
        Projector::new(S::from_int(80), 128, 64)
    }

    #[test]
    fn test_origin_projects_to_display_center_fixed() {
        let p = project_point(
            &projector::<Fixed>(),
            Point3::zero(),
            Point3::from_ints(70, 0, 0),
            Point3::zero(),
        );
        assert_eq!(p.to_pixel(), (64, 32));
    }

    #[test]
    fn test_origin_projects_to_display_center_f32() {
        let p = project_point(
            &projector::<f32>(),
            Point3::zero(),
            Point3::new(70.0, 0.0, 0.0),
            Point3::zero(),
        );
        assert_eq!(p.to_pixel(), (64, 32));
    }

    #[test]
    fn test_non_positive_depth_is_not_visible() {
        let proj = projector::<Fixed>();
        for z in [0, -1, -70, -1000] {
            let camera_space = Point3::from_ints(3, -4, z);
            assert_eq!(proj.project_camera_space(camera_space), None, "depth {z}");
        }
    }

    #[test]
    fn test_behind_camera_returns_marker() {
        let p = project_point(
            &projector::<f32>(),
            Point3::new(200.0, 5.0, 5.0),
            Point3::new(70.0, 0.0, 0.0),
            Point3::zero(),
        );
        assert!(p.is_not_visible());
    }

    #[test]
    fn test_perspective_scaling() {
        let proj = projector::<f32>();
        let p = proj
            .project_camera_space(Point3::new(10.0, -5.0, 40.0))
            .unwrap();
        assert_eq!(p, Point2::new(84.0, 22.0));
    }

    #[test]
    fn test_points_off_screen_are_not_clipped() {
        let proj = projector::<Fixed>();
        let p = proj
            .project_camera_space(Point3::from_ints(100, 0, 10))
            .unwrap();
        assert_eq!(p.to_pixel(), (864, 32));
    }

    #[test]
    fn test_apparent_size() {
        let proj = projector::<Fixed>();
        // 20 * 80 / 70 = 22.86
        assert_eq!(proj.apparent_size(Fixed::from(20), Fixed::from(70)), 22);
        let proj = projector::<f32>();
        assert_eq!(proj.apparent_size(20.0, 70.0), 22);
    }

    #[test]
    fn test_project_to_pixel_uses_view() {
        let proj = projector::<f32>();
        let view = LookAt::new(Point3::new(0.0, 0.0, 70.0), Point3::zero());
        assert_eq!(proj.project_to_pixel(&view, Point3::zero()), Some((64, 32)));
        assert_eq!(proj.project_to_pixel(&view, Point3::new(0.0, 0.0, 90.0)), None);
    }

    #[test]
    fn test_plot_lights_only_visible_points() {
        let proj = projector::<Fixed>();
        let view = LookAt::new(Point3::from_ints(70, 0, 0), Point3::zero());
        let mut fb = Framebuffer::default();

        assert!(proj.plot(&mut fb, &view, Point3::zero()));
        assert!(fb.get_pixel(64, 32));

        // Behind the eye.
        assert!(!proj.plot(&mut fb, &view, Point3::from_ints(120, 0, 0)));
        // In front, but projects far off the left edge.
        assert!(!proj.plot(&mut fb, &view, Point3::from_ints(60, 0, 200)));
        assert_eq!(fb.lit_count(), 1);
    }
}
