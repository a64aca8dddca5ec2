//! gestru — a turtle-style gesture path builder.
//!
//! A [`PathBuilder`] consumes a sequence of drawing commands (straight
//! segments, rotations, circular arcs) and accumulates an ordered polyline
//! approximation in a 2D coordinate space. Axis orientation and decimal
//! precision are configured once via [`Options`] and apply to every point
//! the builder constructs.
//!
//! Internally all math runs in a canonical right-handed frame; the
//! configured orientation is applied as a pure sign projection when the
//! path is read out. Arcs are tessellated into a fixed 181 samples each.
//!
//! # Example
//!
//! ```
//! use gestru::{Options, PathBuilder, json};
//!
//! // A "P" gesture in screen coordinates (y grows downward).
//! let drawer = PathBuilder::with_options(Options::WINDOWS)
//!     .draw_line(4.0, 90.0)
//!     .draw_line(1.0, 0.0)
//!     .draw_arc_relative(1.0, 90.0, -180.0)
//!     .forward(1.0);
//!
//! let path = drawer.drawing_path();
//! assert_eq!(path.len(), 188);
//!
//! // Hand the geometry to a renderer...
//! let polyline = drawer.polyline();
//! assert_eq!(polyline.segments().count(), 187);
//!
//! // ...or serialize it for an external consumer.
//! let text = json::to_json(&path);
//! assert!(text.starts_with(r#"["0,0","0,0","0,4""#));
//! ```
//!
//! # Known boundary
//!
//! Drawing operations are total over the reals and perform no input
//! validation: a NaN or infinite length, radius, or angle propagates
//! silently into the output. Hosts that accept user-provided values should
//! validate them before calling in.

pub mod geometry;
pub mod json;
pub mod log;
pub mod options;
pub mod path_builder;
pub mod types;

pub use geometry::Polyline;
pub use options::{HorizontalDirection, Options, VerticalDirection};
pub use path_builder::{ARC_STEPS, PathBuilder};
pub use types::{Angle, DEG_TO_RAD, Point, round_to};
