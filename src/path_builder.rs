//! Turtle-style path builder for gesture geometry.
//!
//! # Key concepts
//!
//! - **Heading**: the current direction of travel, an [`Angle`]. Line
//!   operations leave it alone or set it absolutely; rotations add to it;
//!   arcs leave it pointing along the exit tangent.
//! - **Internal coordinates**: all accumulated points live in a canonical
//!   right-handed frame (x right, y up). The configured axis orientation is
//!   applied only when reading the path out ([`PathBuilder::drawing_path`]).
//! - **Pair-appending**: [`PathBuilder::forward`] pushes both the old and
//!   the new location, so the stored list is a flat segment list that stays
//!   valid even if a future operation starts somewhere else. Consumers see
//!   the duplicate vertices; they are part of the output contract.

use glam::{DVec2, dvec2};

use crate::geometry::Polyline;
use crate::options::Options;
use crate::types::{Angle, Point};

/// Number of angular steps an arc is tessellated into. Every arc yields
/// `ARC_STEPS + 1` samples, both endpoints included, regardless of sweep
/// magnitude or radius.
pub const ARC_STEPS: i32 = 180;

/// Builder for turtle-graphics gesture paths.
///
/// Every drawing operation consumes and returns the builder, so command
/// sequences chain directly off the constructor. Operations never fail:
/// degenerate inputs (zero length, zero sweep, zero radius) produce
/// well-defined degenerate geometry, and non-finite inputs propagate into
/// the output unvalidated.
///
/// # Example
///
/// ```
/// use gestru::PathBuilder;
///
/// // The "P" gesture: a tall stroke up, then the bowl drawn as an arc.
/// let drawer = PathBuilder::new()
///     .draw_line(4.0, 90.0)
///     .draw_line(1.0, 0.0)
///     .draw_arc_relative(1.0, 90.0, -180.0)
///     .forward(1.0);
///
/// let path = drawer.drawing_path();
/// assert_eq!(path.len(), 188); // 1 start + 2 + 2 + 181 arc samples + 2
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    options: Options,
    /// Current pen position, in internal coordinates.
    location: Point,
    /// Current direction of travel.
    heading: Angle,
    /// Every vertex visited so far, in internal coordinates. Grows only.
    points: Vec<Point>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        PathBuilder::new()
    }
}

impl PathBuilder {
    /// Create a builder with [`Options::DEFAULT`] (x right, y up, 4 digits).
    pub fn new() -> Self {
        PathBuilder::with_options(Options::DEFAULT)
    }

    /// Create a builder with explicit options.
    ///
    /// The starting point `(0, 0)` is already on the path, and the heading
    /// is the orientation-adjusted zero angle.
    pub fn with_options(options: Options) -> Self {
        PathBuilder {
            options,
            location: Point::ZERO,
            heading: Angle::new(0.0, options.horizontal),
            points: vec![Point::ZERO],
        }
    }

    /// Wrap an absolute user-facing direction under the configured
    /// orientation.
    fn absolute(&self, degrees: f64) -> Angle {
        Angle::new(degrees, self.options.horizontal)
    }

    /// Move `length` units along the current heading.
    ///
    /// Appends the current location and the new endpoint (in that order),
    /// then advances the pen. Heading is unchanged.
    pub fn forward(mut self, length: f64) -> Self {
        let end = Point::polar_from(self.heading, length, self.location, self.options.precision);
        crate::log::debug!(length, ?end, "forward");
        self.points.push(self.location);
        self.points.push(end);
        self.location = end;
        self
    }

    /// Draw a straight segment of `length` at the absolute direction
    /// `degrees` (not cumulative), leaving the heading set to it.
    pub fn draw_line(self, length: f64, degrees: f64) -> Self {
        let heading = self.absolute(degrees);
        Self { heading, ..self }.forward(length)
    }

    /// Turn in place by `degrees` (cumulative, no point is appended).
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.heading = self.heading + Angle::from_raw(degrees);
        self
    }

    /// Draw an arc whose start angle is relative to the current heading.
    ///
    /// The heading first advances by `relative_start_degrees`, then the arc
    /// is drawn with the updated heading as its absolute start angle.
    pub fn draw_arc_relative(
        mut self,
        radius: f64,
        relative_start_degrees: f64,
        sweep_degrees: f64,
    ) -> Self {
        self.heading = self.heading + Angle::from_raw(relative_start_degrees);
        let start = self.heading;
        self.arc_from(radius, start, Angle::from_raw(sweep_degrees))
    }

    /// Draw an arc of `radius` starting at the absolute angle
    /// `start_degrees` and sweeping `sweep_degrees` (sign picks the
    /// rotation sense).
    pub fn draw_arc(self, radius: f64, start_degrees: f64, sweep_degrees: f64) -> Self {
        let start = self.absolute(start_degrees);
        self.arc_from(radius, start, Angle::from_raw(sweep_degrees))
    }

    /// Place the arc's center so the arc begins at the current location,
    /// then tessellate.
    fn arc_from(self, radius: f64, start: Angle, sweep: Angle) -> Self {
        let first = Point::polar(start, radius, self.options.precision);
        let center = Point::new(
            self.location.x() - first.x(),
            self.location.y() - first.y(),
            self.options.precision,
        );
        self.arc_about(center, radius, start, sweep)
    }

    /// Tessellate an arc about `center` into [`ARC_STEPS`] equal angular
    /// steps (both endpoints included) and append every sample.
    ///
    /// A zero sweep is a no-op. Afterwards the pen sits on the arc's exact
    /// endpoint and the heading points along the exit tangent: the endpoint
    /// angle plus 90° for a positive sweep, minus 90° for a negative one.
    fn arc_about(mut self, center: Point, radius: f64, start: Angle, sweep: Angle) -> Self {
        if sweep.raw() == 0.0 {
            return self;
        }

        crate::log::debug!(
            radius,
            start = start.raw(),
            sweep = sweep.raw(),
            ?center,
            "arc"
        );

        let precision = self.options.precision;
        let step = sweep / ARC_STEPS;
        for i in 0..=ARC_STEPS {
            let sample = start + step * i;
            self.points
                .push(Point::polar_from(sample, radius, center, precision));
        }

        let end = start + sweep;
        self.location = Point::polar_from(end, radius, center, precision);
        let quarter_turn = if sweep.raw() > 0.0 { 90.0 } else { -90.0 };
        self.heading = end + Angle::from_raw(quarter_turn);
        self
    }

    /// The accumulated path projected into output coordinates.
    ///
    /// A pure read: internal x and y are multiplied by the configured axis
    /// signs. Safe to call at any time; reflects every point appended so
    /// far.
    pub fn drawing_path(&self) -> Vec<DVec2> {
        let hsign = self.options.horizontal.sign();
        let vsign = self.options.vertical.sign();
        self.points
            .iter()
            .map(|p| dvec2(p.x() * hsign, p.y() * vsign))
            .collect()
    }

    /// The output path as a connected polyline, ready for a renderer.
    pub fn polyline(&self) -> Polyline {
        Polyline::new(self.drawing_path())
    }

    /// The options this builder was constructed with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Current pen position, in internal coordinates.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Current heading.
    pub fn heading(&self) -> Angle {
        self.heading
    }

    /// Number of points accumulated so far (internal and output counts are
    /// always equal).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the starting point is appended at construction.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
