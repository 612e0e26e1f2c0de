use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Scalar;

/// Fixed-point number with 16 fractional bits (Q16.16).
///
/// Layout: [16 integer bits][16 fractional bits]
///
/// The raw i32 value equals (real_value × 2¹⁶).
///
/// Range: approximately ±32767.99998
/// Resolution: 2⁻¹⁶ ≈ 1.53×10⁻⁵
///
/// Arithmetic saturates at the range limits instead of wrapping. Multiply
/// rounds toward negative infinity, divide rounds toward zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed {
    raw: i32,
}

pub const FRAC_BITS: u32 = 16;
const ONE_RAW: i32 = 1 << FRAC_BITS;

// π and π/2 truncated to Q16.16, as the display firmware defines them.
const PI_RAW: i32 = 205_887;
const FRAC_PI_2_RAW: i32 = 102_943;
const TAU_RAW: i32 = 2 * PI_RAW;
// 0.001
const EPSILON_RAW: i32 = 65;

/// Newton-Raphson iteration cap for [`Fixed::sqrt`].
const SQRT_ITERATIONS: u32 = 10;

/// Number of entries in the sine table, covering one full turn.
pub const SIN_TABLE_SIZE: usize = 256;

/// sin(2π·i/256) in Q16.16.
#[rustfmt::skip]
static SIN_TABLE: [i32; SIN_TABLE_SIZE] = [
    0, 1608, 3216, 4821, 6424, 8022, 9616, 11204, 12785, 14359, 15924, 17479, 19024, 20557, 22078, 23586,
    25080, 26558, 28020, 29466, 30893, 32302, 33692, 35061, 36410, 37736, 39040, 40320, 41576, 42806, 44011, 45190,
    46341, 47464, 48559, 49624, 50660, 51665, 52639, 53581, 54491, 55368, 56212, 57022, 57798, 58538, 59244, 59914,
    60547, 61145, 61705, 62228, 62714, 63162, 63572, 63944, 64277, 64571, 64827, 65043, 65220, 65358, 65457, 65516,
    65536, 65516, 65457, 65358, 65220, 65043, 64827, 64571, 64277, 63944, 63572, 63162, 62714, 62228, 61705, 61145,
    60547, 59914, 59244, 58538, 57798, 57022, 56212, 55368, 54491, 53581, 52639, 51665, 50660, 49624, 48559, 47464,
    46341, 45190, 44011, 42806, 41576, 40320, 39040, 37736, 36410, 35061, 33692, 32302, 30893, 29466, 28020, 26558,
    25080, 23586, 22078, 20557, 19024, 17479, 15924, 14359, 12785, 11204, 9616, 8022, 6424, 4821, 3216, 1608,
    0, -1608, -3216, -4821, -6424, -8022, -9616, -11204, -12785, -14359, -15924, -17479, -19024, -20557, -22078, -23586,
    -25080, -26558, -28020, -29466, -30893, -32302, -33692, -35061, -36410, -37736, -39040, -40320, -41576, -42806, -44011, -45190,
    -46341, -47464, -48559, -49624, -50660, -51665, -52639, -53581, -54491, -55368, -56212, -57022, -57798, -58538, -59244, -59914,
    -60547, -61145, -61705, -62228, -62714, -63162, -63572, -63944, -64277, -64571, -64827, -65043, -65220, -65358, -65457, -65516,
    -65536, -65516, -65457, -65358, -65220, -65043, -64827, -64571, -64277, -63944, -63572, -63162, -62714, -62228, -61705, -61145,
    -60547, -59914, -59244, -58538, -57798, -57022, -56212, -55368, -54491, -53581, -52639, -51665, -50660, -49624, -48559, -47464,
    -46341, -45190, -44011, -42806, -41576, -40320, -39040, -37736, -36410, -35061, -33692, -32302, -30893, -29466, -28020, -26558,
    -25080, -23586, -22078, -20557, -19024, -17479, -15924, -14359, -12785, -11204, -9616, -8022, -6424, -4821, -3216, -1608,
];

const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

impl Fixed {
    /// Create from the raw i32 representation directly.
    pub const fn from_raw(raw: i32) -> Self {
        Self { raw }
    }

    /// Access the raw i32 value.
    pub const fn to_raw(self) -> i32 {
        self.raw
    }

    /// Create from a whole integer (no fractional part), saturating outside
    /// the representable range.
    pub const fn from_int(value: i32) -> Self {
        Self {
            raw: saturate((value as i64) << FRAC_BITS),
        }
    }

    /// Convert from `f32`, truncating toward zero.
    pub fn from_f32(value: f32) -> Self {
        Self {
            raw: (value * ONE_RAW as f32) as i32,
        }
    }

    pub fn to_f32(self) -> f32 {
        self.raw as f32 / ONE_RAW as f32
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn floor_to_int(self) -> i32 {
        self.raw >> FRAC_BITS
    }

    /// Multiply two Q16.16 values.
    ///
    /// The 64-bit product is shifted back by FRAC_BITS, then saturated.
    pub const fn fixed_mul(self, rhs: Fixed) -> Fixed {
        let product = (self.raw as i64 * rhs.raw as i64) >> FRAC_BITS;
        Fixed {
            raw: saturate(product),
        }
    }

    /// Divide two Q16.16 values.
    ///
    /// The dividend is pre-shifted by FRAC_BITS to keep precision. A zero
    /// divisor saturates toward the sign of the dividend (0 / 0 is 0).
    pub const fn fixed_div(self, rhs: Fixed) -> Fixed {
        if rhs.raw == 0 {
            let raw = if self.raw > 0 {
                i32::MAX
            } else if self.raw < 0 {
                i32::MIN
            } else {
                0
            };
            return Fixed { raw };
        }
        let quotient = ((self.raw as i64) << FRAC_BITS) / rhs.raw as i64;
        Fixed {
            raw: saturate(quotient),
        }
    }

    pub const fn abs(self) -> Fixed {
        Fixed {
            raw: self.raw.saturating_abs(),
        }
    }

    /// Newton-Raphson square root.
    ///
    /// Starts from `v / 2` (at least one raw unit). The first step always
    /// lands at or above the root, after which iteration continues while the
    /// estimate keeps decreasing, up to [`SQRT_ITERATIONS`] steps in total.
    /// Non-positive input yields zero.
    pub fn sqrt(self) -> Fixed {
        if self.raw <= 0 {
            return Fixed::from_raw(0);
        }

        let mut guess = (self.raw >> 1).max(1);
        for step in 0..SQRT_ITERATIONS {
            let quotient = self.fixed_div(Fixed::from_raw(guess)).raw;
            let next = saturate((guess as i64 + quotient as i64) >> 1);
            if step > 0 && next >= guess {
                break;
            }
            guess = next.max(1);
        }
        Fixed::from_raw(guess)
    }

    /// Normalize into `[0, 2π)` by whole turns.
    pub const fn wrap_angle(self) -> Fixed {
        Fixed {
            raw: self.raw.rem_euclid(TAU_RAW),
        }
    }

    /// Table-driven sine: index = floor(angle / 2π · 256), clamped to the
    /// last entry.
    pub fn sin(self) -> Fixed {
        let angle = self.wrap_angle().raw as i64;
        let index = (angle * SIN_TABLE_SIZE as i64 / TAU_RAW as i64) as usize;
        Fixed::from_raw(SIN_TABLE[index.min(SIN_TABLE_SIZE - 1)])
    }

    /// `cos(a) = sin(a + π/2)`.
    pub fn cos(self) -> Fixed {
        Fixed::from_raw(self.wrap_angle().raw + FRAC_PI_2_RAW).sin()
    }

    /// `2π · numerator / denominator` computed in i64 and truncated, wrapped
    /// into `[0, 2π)`. A zero denominator gives zero.
    pub const fn turn_fraction(numerator: u32, denominator: u32) -> Fixed {
        if denominator == 0 {
            return Fixed { raw: 0 };
        }
        let numerator = numerator % denominator;
        Fixed {
            raw: (TAU_RAW as i64 * numerator as i64 / denominator as i64) as i32,
        }
    }
}

impl Scalar for Fixed {
    const ZERO: Self = Fixed::from_raw(0);
    const ONE: Self = Fixed::from_raw(ONE_RAW);
    const PI: Self = Fixed::from_raw(PI_RAW);
    const FRAC_PI_2: Self = Fixed::from_raw(FRAC_PI_2_RAW);
    const TAU: Self = Fixed::from_raw(TAU_RAW);
    const EPSILON: Self = Fixed::from_raw(EPSILON_RAW);

    fn from_int(value: i32) -> Self {
        Fixed::from_int(value)
    }

    fn from_f32(value: f32) -> Self {
        Fixed::from_f32(value)
    }

    fn to_f32(self) -> f32 {
        Fixed::to_f32(self)
    }

    fn floor_to_int(self) -> i32 {
        Fixed::floor_to_int(self)
    }

    fn sqrt(self) -> Self {
        Fixed::sqrt(self)
    }

    fn sin(self) -> Self {
        Fixed::sin(self)
    }

    fn cos(self) -> Self {
        Fixed::cos(self)
    }

    fn wrap_angle(self) -> Self {
        Fixed::wrap_angle(self)
    }

    fn turn_fraction(numerator: u32, denominator: u32) -> Self {
        Fixed::turn_fraction(numerator, denominator)
    }

    fn abs(self) -> Self {
        Fixed::abs(self)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl From<f32> for Fixed {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Fixed> for f32 {
    fn from(fixed: Fixed) -> f32 {
        fixed.to_f32()
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Self::Output {
        Fixed {
            raw: self.raw.saturating_add(rhs.raw),
        }
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Self::Output {
        Fixed {
            raw: self.raw.saturating_sub(rhs.raw),
        }
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Self::Output {
        self.fixed_mul(rhs)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    fn div(self, rhs: Fixed) -> Self::Output {
        self.fixed_div(rhs)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Self::Output {
        Fixed {
            raw: self.raw.saturating_neg(),
        }
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    fn mul_assign(&mut self, rhs: Fixed) {
        *self = self.fixed_mul(rhs);
    }
}
