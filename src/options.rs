//! Builder configuration: axis orientation and numeric precision.
//!
//! An [`Options`] value is fixed at builder construction and consulted in two
//! places: angle construction (horizontal orientation) and the final
//! internal-to-output coordinate projection (both axis signs).

/// Positive direction of the horizontal axis as seen by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalDirection {
    Left,
    #[default]
    Right,
}

impl HorizontalDirection {
    /// Sign applied to internal x coordinates on output.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            HorizontalDirection::Right => 1.0,
            HorizontalDirection::Left => -1.0,
        }
    }
}

/// Positive direction of the vertical axis as seen by the consumer.
///
/// `Down` is the screen/window convention (y grows downward), `Up` the
/// mathematical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalDirection {
    #[default]
    Up,
    Down,
}

impl VerticalDirection {
    /// Sign applied to internal y coordinates on output.
    ///
    /// Internal math is y-up, so `Down` passes values through and `Up`
    /// negates them.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            VerticalDirection::Down => 1.0,
            VerticalDirection::Up => -1.0,
        }
    }
}

/// Immutable drawing configuration.
///
/// Changing precision after points have been constructed has no retroactive
/// effect; the builder captures an `Options` once and uses it for every
/// point and angle it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Positive x direction (default: right).
    pub horizontal: HorizontalDirection,
    /// Positive y direction (default: up).
    pub vertical: VerticalDirection,
    /// Decimal digits kept when rounding point coordinates (default: 4).
    pub precision: u32,
}

impl Options {
    /// Mathematical convention: x right, y up, 4 decimal digits.
    pub const DEFAULT: Options = Options {
        horizontal: HorizontalDirection::Right,
        vertical: VerticalDirection::Up,
        precision: 4,
    };

    /// Screen convention (x right, y down), as used by window systems.
    pub const WINDOWS: Options = Options {
        horizontal: HorizontalDirection::Right,
        vertical: VerticalDirection::Down,
        precision: 4,
    };
}

impl Default for Options {
    fn default() -> Self {
        Options::DEFAULT
    }
}
