use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::Scalar;

/// 3D position or direction.
///
/// No distinction is made between points and vectors; callers decide
/// whether translation or rotation applies.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Point3<S> {
    /// Create a new Point3 with the given coordinates.
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    /// Create a point from whole-unit integer coordinates.
    pub fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(S::from_int(x), S::from_int(y), S::from_int(z))
    }

    /// Zero vector (0, 0, 0).
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO)
    }

    /// Unit vector in the Y direction (0, 1, 0).
    pub fn unit_y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO)
    }

    /// Unit vector in the Z direction (0, 0, 1).
    pub fn unit_z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE)
    }

    /// Returns the dot product: x₁x₂ + y₁y₂ + z₁z₂
    pub fn dot(self, rhs: Point3<S>) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product self × rhs.
    ///
    ///   result.x = self.y * rhs.z - self.z * rhs.y
    ///   result.y = self.z * rhs.x - self.x * rhs.z
    ///   result.z = self.x * rhs.y - self.y * rhs.x
    pub fn cross(self, rhs: Point3<S>) -> Point3<S> {
        Point3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Squared length.
    ///
    /// # Overflow
    /// With [`Fixed`](crate::Fixed) components the sum saturates once the
    /// length exceeds ~181 units.
    pub fn length_squared(self) -> S {
        self.dot(self)
    }

    pub fn length(self) -> S {
        self.length_squared().sqrt()
    }

    /// Scale to unit length, or return `fallback` when the length is at or
    /// below [`Scalar::EPSILON`].
    pub fn normalize_or(self, fallback: Point3<S>) -> Point3<S> {
        let len = self.length();
        if len > S::EPSILON {
            Point3::new(self.x / len, self.y / len, self.z / len)
        } else {
            fallback
        }
    }

    /// Rotate about the X axis; x is unchanged.
    pub fn rotate_x(self, angle: S) -> Point3<S> {
        let (sin_a, cos_a) = (angle.sin(), angle.cos());
        Point3::new(
            self.x,
            self.y * cos_a - self.z * sin_a,
            self.y * sin_a + self.z * cos_a,
        )
    }

    /// Rotate about the Y axis; y is unchanged.
    pub fn rotate_y(self, angle: S) -> Point3<S> {
        let (sin_a, cos_a) = (angle.sin(), angle.cos());
        Point3::new(
            self.x * cos_a - self.z * sin_a,
            self.y,
            self.x * sin_a + self.z * cos_a,
        )
    }
}

impl<S: Scalar> fmt::Display for Point3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<S: Scalar> Add for Point3<S> {
    type Output = Point3<S>;

    fn add(self, rhs: Point3<S>) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Point3<S> {
    type Output = Point3<S>;

    fn sub(self, rhs: Point3<S>) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Neg for Point3<S> {
    type Output = Point3<S>;

    fn neg(self) -> Self::Output {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl<S: Scalar> Mul<S> for Point3<S> {
    type Output = Point3<S>;

    fn mul(self, rhs: S) -> Self::Output {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> AddAssign for Point3<S> {
    fn add_assign(&mut self, rhs: Point3<S>) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Point3<S> {
    fn sub_assign(&mut self, rhs: Point3<S>) {
        *self = *self - rhs;
    }
}

/// Screen-space coordinate before truncation to pixel indices.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2<S> {
    pub x: S,
    pub y: S,
}

/// Display units used for the "not visible" marker, far outside any screen.
const NOT_VISIBLE: i32 = -1000;

impl<S: Scalar> Point2<S> {
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// The reserved marker for points behind the camera.
    pub fn not_visible() -> Self {
        Self::new(S::from_int(NOT_VISIBLE), S::from_int(NOT_VISIBLE))
    }

    pub fn is_not_visible(self) -> bool {
        self == Self::not_visible()
    }

    /// Pixel indices, each coordinate floored.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.floor_to_int(), self.y.floor_to_int())
    }
}

impl<S: Scalar> fmt::Display for Point2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S: Scalar> Add for Point2<S> {
    type Output = Point2<S>;

    fn add(self, rhs: Point2<S>) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Point2<S> {
    type Output = Point2<S>;

    fn sub(self, rhs: Point2<S>) -> Self::Output {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
