use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Real number abstraction shared by the whole rendering pipeline.
///
/// Two implementations exist: [`Fixed`](crate::Fixed) (Q16.16, table-driven
/// trigonometry, Newton-Raphson square root) and `f32` (native functions).
/// Both follow the same policies:
///
/// - `sqrt` of a non-positive value is zero.
/// - `sin`/`cos` are periodic over [`TAU`](Self::TAU) and
///   `cos(a) == sin(a + FRAC_PI_2)`.
/// - [`floor_to_int`](Self::floor_to_int) rounds toward negative infinity.
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    const ONE: Self;
    const PI: Self;
    const FRAC_PI_2: Self;
    /// One full turn (2π).
    const TAU: Self;
    /// Lengths at or below this are treated as degenerate when normalizing.
    const EPSILON: Self;

    fn from_int(value: i32) -> Self;

    fn from_f32(value: f32) -> Self;

    fn to_f32(self) -> f32;

    /// Largest integer not greater than `self`, saturated to the `i32` range.
    fn floor_to_int(self) -> i32;

    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// Normalize an angle into `[0, TAU)` by whole turns.
    fn wrap_angle(self) -> Self;

    /// The angle `TAU · numerator / denominator`, wrapped into `[0, TAU)`.
    /// Zero when `denominator` is zero.
    fn turn_fraction(numerator: u32, denominator: u32) -> Self;

    /// Interpret `self` as degrees and convert to radians as `deg * PI / 180`.
    fn to_radians(self) -> Self {
        self * Self::PI / Self::from_int(180)
    }

    /// Convert whole degrees to radians.
    fn from_degrees(degrees: i32) -> Self {
        Self::from_int(degrees).to_radians()
    }

    fn abs(self) -> Self {
        if self < Self::ZERO { -self } else { self }
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PI: Self = std::f32::consts::PI;
    const FRAC_PI_2: Self = std::f32::consts::FRAC_PI_2;
    const TAU: Self = std::f32::consts::TAU;
    const EPSILON: Self = 0.001;

    fn from_int(value: i32) -> Self {
        value as f32
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn to_f32(self) -> f32 {
        self
    }

    fn floor_to_int(self) -> i32 {
        f32::floor(self) as i32
    }

    fn sqrt(self) -> Self {
        if self <= 0.0 { 0.0 } else { f32::sqrt(self) }
    }

    fn sin(self) -> Self {
        f32::sin(self)
    }

    fn cos(self) -> Self {
        f32::cos(self)
    }

    fn wrap_angle(self) -> Self {
        let wrapped = self.rem_euclid(Self::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if wrapped >= Self::TAU { 0.0 } else { wrapped }
    }

    fn turn_fraction(numerator: u32, denominator: u32) -> Self {
        if denominator == 0 {
            return 0.0;
        }
        let fraction = f64::from(numerator % denominator) / f64::from(denominator);
        ((std::f64::consts::TAU * fraction) as f32).wrap_angle()
    }

    fn to_radians(self) -> Self {
        f32::to_radians(self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }
}
