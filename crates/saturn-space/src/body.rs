//! The planet body, drawn either as a filled disc or as a sparse point cloud.

use saturn_math::{Point3, Scalar};
use saturn_render::{Framebuffer, LookAt, Projector};

/// Latitude and longitude spacing of the point-cloud body, in degrees.
pub const POINT_CLOUD_STEP_DEGREES: usize = 10;

/// How the planet body is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// Filled disc with the sphere's apparent radius.
    #[default]
    Disc,
    /// Sphere sampled on a latitude/longitude grid.
    PointCloud,
}

/// Draw a body of `radius` centered on the world origin, seen from
/// `camera_distance` away. Returns the number of pixels written.
pub fn draw_body<S: Scalar>(
    framebuffer: &mut Framebuffer,
    projector: &Projector<S>,
    view: &LookAt<S>,
    radius: S,
    camera_distance: S,
    mode: BodyMode,
) -> usize {
    match mode {
        BodyMode::Disc => draw_disc(framebuffer, projector, view, radius, camera_distance),
        BodyMode::PointCloud => draw_point_cloud(framebuffer, projector, view, radius),
    }
}

fn draw_disc<S: Scalar>(
    framebuffer: &mut Framebuffer,
    projector: &Projector<S>,
    view: &LookAt<S>,
    radius: S,
    camera_distance: S,
) -> usize {
    if camera_distance <= S::ZERO {
        return 0;
    }
    let Some((cx, cy)) = projector.project_to_pixel(view, Point3::zero()) else {
        return 0;
    };
    let r = projector.apparent_size(radius, camera_distance).max(0);

    let width = framebuffer.width() as i32;
    let height = framebuffer.height() as i32;
    let x_range = cx.saturating_sub(r).max(0)..=cx.saturating_add(r).min(width - 1);
    let y_range = cy.saturating_sub(r).max(0)..=cy.saturating_add(r).min(height - 1);
    if x_range.is_empty() || y_range.is_empty() {
        return 0;
    }

    let r_sq = i64::from(r).pow(2);
    let mut written = 0;
    for y in y_range {
        let dy = i64::from(y) - i64::from(cy);
        for x in x_range.clone() {
            let dx = i64::from(x) - i64::from(cx);
            if dx * dx + dy * dy <= r_sq {
                framebuffer.set_pixel(x, y, true);
                written += 1;
            }
        }
    }
    written
}

fn draw_point_cloud<S: Scalar>(
    framebuffer: &mut Framebuffer,
    projector: &Projector<S>,
    view: &LookAt<S>,
    radius: S,
) -> usize {
    let mut written = 0;
    for latitude in (-90..=90).step_by(POINT_CLOUD_STEP_DEGREES) {
        let lat = S::from_degrees(latitude);
        let (ring_radius, height) = (radius * lat.cos(), radius * lat.sin());
        for longitude in (0..360).step_by(POINT_CLOUD_STEP_DEGREES) {
            let lon = S::from_degrees(longitude);
            let point = Point3::new(ring_radius * lon.cos(), height, ring_radius * lon.sin());
            if projector.plot(framebuffer, view, point) {
                written += 1;
            }
        }
    }
    written
}
