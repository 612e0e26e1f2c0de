//! Ring bands: flat annuli around the planet, tilted about the X axis and
//! drawn as a lattice of points.

use saturn_math::{Point3, Scalar};
use saturn_render::{Framebuffer, LookAt, Projector};

/// One ring band, bounded by an inner and outer radius in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec<S> {
    pub inner: S,
    pub outer: S,
}

impl<S: Scalar> RingSpec<S> {
    pub fn new(inner: S, outer: S) -> Self {
        Self { inner, outer }
    }

    pub fn from_ints(inner: i32, outer: i32) -> Self {
        Self::new(S::from_int(inner), S::from_int(outer))
    }
}

/// Sampling density shared by all bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSteps<S> {
    /// Angular step in whole degrees. Must be positive.
    pub angular_degrees: u32,
    /// Radial step in world units. Must be positive.
    pub radial: S,
}

impl<S: Scalar> Default for RingSteps<S> {
    fn default() -> Self {
        Self {
            angular_degrees: 3,
            radial: S::ONE,
        }
    }
}

/// World-space sample points of `ring`, centered on `center` and tilted by
/// `tilt` radians about the X axis.
///
/// Angles run `0, step, 2·step, …` below 360°, radii run from `inner` up to
/// and including `outer`. A non-positive radial step yields only the inner
/// edge.
pub fn ring_points<S: Scalar>(
    ring: RingSpec<S>,
    steps: RingSteps<S>,
    center: Point3<S>,
    tilt: S,
) -> impl Iterator<Item = Point3<S>> {
    let angular = steps.angular_degrees.max(1) as usize;
    (0..360)
        .step_by(angular)
        .flat_map(move |degrees| {
            let angle = S::from_degrees(degrees);
            let (cos, sin) = (angle.cos(), angle.sin());
            radii(ring, steps.radial).map(move |r| Point3::new(r * cos, S::ZERO, r * sin))
        })
        .map(move |flat| flat.rotate_x(tilt) + center)
}

/// Number of points [`ring_points`] yields for `ring`.
pub fn ring_point_count<S: Scalar>(ring: RingSpec<S>, steps: RingSteps<S>) -> usize {
    let angular = steps.angular_degrees.max(1) as usize;
    (0..360).step_by(angular).len() * radii(ring, steps.radial).count()
}

/// Project and plot every point of `ring`. Returns the number of pixels lit.
pub fn draw_ring<S: Scalar>(
    framebuffer: &mut Framebuffer,
    projector: &Projector<S>,
    view: &LookAt<S>,
    ring: RingSpec<S>,
    steps: RingSteps<S>,
    tilt: S,
) -> usize {
    ring_points(ring, steps, Point3::zero(), tilt)
        .filter(|&point| projector.plot(framebuffer, view, point))
        .count()
}

fn radii<S: Scalar>(ring: RingSpec<S>, step: S) -> impl Iterator<Item = S> {
    let mut next = (ring.inner <= ring.outer).then_some(ring.inner);
    std::iter::from_fn(move || {
        let r = next?;
        let following = r + step;
        next = (step > S::ZERO && following <= ring.outer && following > r).then_some(following);
        Some(r)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturn_math::Fixed;

    fn steps<S: Scalar>(angular_degrees: u32, radial: i32) -> RingSteps<S> {
        RingSteps {
            angular_degrees,
            radial: S::from_int(radial),
        }
    }

    #[test]
    fn test_band_point_count() {
        let ring = RingSpec::<Fixed>::from_ints(18, 20);
        assert_eq!(ring_point_count(ring, steps(3, 1)), 360);
        assert_eq!(
            ring_points(ring, steps(3, 1), Point3::zero(), Fixed::ZERO).count(),
            360
        );
    }

    #[test]
    fn test_count_with_uneven_steps() {
        let ring = RingSpec::<f32>::from_ints(22, 27);
        // Radii 22, 24, 26; angles 0, 7, ..., 357.
        assert_eq!(ring_point_count(ring, steps(7, 2)), 52 * 3);
        assert_eq!(
            ring_points(ring, steps(7, 2), Point3::zero(), 0.0).count(),
            52 * 3
        );
    }

    #[test]
    fn test_inverted_band_is_empty() {
        let ring = RingSpec::<f32>::from_ints(30, 20);
        assert_eq!(ring_point_count(ring, steps(3, 1)), 0);
    }

    #[test]
    fn test_zero_radial_step_samples_inner_edge_only() {
        let ring = RingSpec::<Fixed>::from_ints(18, 20);
        assert_eq!(ring_point_count(ring, steps(3, 0)), 120);
    }

    #[test]
    fn test_untilted_ring_lies_in_xz_plane() {
        let ring = RingSpec::<f32>::from_ints(18, 20);
        for p in ring_points(ring, steps(3, 1), Point3::zero(), 0.0) {
            assert_eq!(p.y, 0.0);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((17.99..=20.01).contains(&r), "radius {r} outside band");
        }
    }

    #[test]
    fn test_first_point_is_on_positive_x() {
        let ring = RingSpec::<f32>::from_ints(18, 20);
        let first = ring_points(ring, steps(3, 1), Point3::zero(), 0.3)
            .next()
            .unwrap();
        // Rotation about X leaves points on the X axis in place.
        assert_eq!(first, Point3::new(18.0, 0.0, 0.0));
    }

    #[test]
    fn test_tilt_lifts_points_out_of_plane() {
        let ring = RingSpec::<f32>::from_ints(20, 20);
        let tilt = f32::from_degrees(27);
        let max_height = ring_points(ring, steps(3, 1), Point3::zero(), tilt)
            .map(|p| p.y.abs())
            .fold(0.0, f32::max);
        // 20 * sin(27°) ≈ 9.08
        assert!((max_height - 9.08).abs() < 0.05, "max height {max_height}");
    }

    #[test]
    fn test_center_offsets_points() {
        let ring = RingSpec::<Fixed>::from_ints(18, 18);
        let center = Point3::from_ints(5, -3, 2);
        let offsets: Vec<_> = ring_points(ring, steps(90, 1), Point3::zero(), Fixed::ZERO).collect();
        let moved: Vec<_> = ring_points(ring, steps(90, 1), center, Fixed::ZERO).collect();
        for (a, b) in offsets.iter().zip(moved.iter()) {
            assert_eq!(*a + center, *b);
        }
    }

    #[test]
    fn test_draw_ring_lights_pixels_around_center() {
        let projector = Projector::new(Fixed::from_int(80), 128, 64);
        let view = LookAt::new(Point3::from_ints(70, 0, 0), Point3::zero());
        let mut fb = Framebuffer::default();
        let ring = RingSpec::from_ints(18, 20);
        let lit = draw_ring(
            &mut fb,
            &projector,
            &view,
            ring,
            steps(3, 1),
            Fixed::from_degrees(27),
        );
        assert!(lit > 0);
        assert!(fb.lit_count() > 0);
        assert!(fb.lit_count() as usize <= lit);
    }
}
