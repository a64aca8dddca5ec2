//! Strongly-typed numeric primitives: angles and fixed-precision points.
//!
//! Design goals:
//! - No raw `f64` headings in builder logic
//! - Rounding happens once, at `Point` construction
//! - Conversions between degrees and an [`Angle`] are explicit

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::options::HorizontalDirection;

/// Degrees-to-radians conversion factor (π/180).
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Round `value` to `digits` decimal digits.
///
/// Scale-round-unscale with `f64::round` (ties away from zero). Non-finite
/// values pass through unchanged.
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// A direction or rotation in degrees.
///
/// The raw value is kept as given (plus the orientation offset, see
/// [`Angle::new`]); the normalized reading in `[0, 360)` is computed lazily
/// by [`Angle::degrees`]. Arithmetic, equality, and ordering all operate on
/// raw values, so `(a + b) - b` is exactly `a` and sums accumulate without
/// wrap-around until read.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    /// The raw zero angle. Carries no orientation offset; it is the
    /// canonical internal "facing +x" heading.
    pub const ZERO: Angle = Angle(0.0);

    /// Wrap a user-facing degree value under the given horizontal
    /// orientation.
    ///
    /// With [`HorizontalDirection::Left`] the stored value gains 180°, so
    /// that left-positive conventions reuse the same trigonometry: internal
    /// math always runs right-handed and the output projection applies the
    /// user-visible sign flip.
    #[inline]
    pub fn new(degrees: f64, orientation: HorizontalDirection) -> Angle {
        match orientation {
            HorizontalDirection::Right => Angle(degrees),
            HorizontalDirection::Left => Angle(degrees + 180.0),
        }
    }

    /// Wrap a degree value with no orientation offset.
    ///
    /// For relative quantities (rotation deltas, sweeps): they are
    /// differences of directions, where the orientation offset cancels.
    #[inline]
    pub const fn from_raw(degrees: f64) -> Angle {
        Angle(degrees)
    }

    /// The raw (pre-normalization) degree value.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// The normalized degree value, always in `[0, 360)`.
    #[inline]
    pub fn degrees(self) -> f64 {
        (self.0 % 360.0 + 360.0) % 360.0
    }

    /// The normalized value in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.degrees() * DEG_TO_RAD
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}
impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}
impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}
impl Mul<i32> for Angle {
    type Output = Angle;
    fn mul(self, rhs: i32) -> Angle {
        Angle(self.0 * f64::from(rhs))
    }
}
impl Mul<Angle> for i32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}
impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}
impl Div<i32> for Angle {
    type Output = Angle;
    fn div(self, rhs: i32) -> Angle {
        Angle(self.0 / f64::from(rhs))
    }
}

/// An immutable 2D coordinate with fixed decimal precision.
///
/// Both components are rounded at construction; nothing rounds again later.
/// Equality compares the rounded components. Inputs are not validated: a NaN
/// or infinite component is stored as-is and propagates into any geometry
/// derived from the point.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin. Exact regardless of precision.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Cartesian constructor; rounds each component to `precision` digits.
    #[inline]
    pub fn new(x: f64, y: f64, precision: u32) -> Point {
        Point {
            x: round_to(x, precision),
            y: round_to(y, precision),
        }
    }

    /// The point at `radius` along `angle` from the origin.
    #[inline]
    pub fn polar(angle: Angle, radius: f64, precision: u32) -> Point {
        Point::polar_from(angle, radius, Point::ZERO, precision)
    }

    /// The point at `radius` along `angle` from `origin`:
    /// `origin + radius·(cos angle, sin angle)`.
    #[inline]
    pub fn polar_from(angle: Angle, radius: f64, origin: Point, precision: u32) -> Point {
        let rad = angle.radians();
        Point::new(
            rad.cos() * radius + origin.x,
            rad.sin() * radius + origin.y,
            precision,
        )
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }
}
