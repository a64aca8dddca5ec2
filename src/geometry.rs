//! Renderer-facing polyline geometry.
//!
//! A [`Polyline`] is the handoff format for the drawn path: the first point
//! is the figure start, every subsequent point is joined to its predecessor
//! by a straight segment. Coordinates are output-space [`DVec2`] values
//! (already sign-projected by the builder).

use glam::DVec2;

/// A connected sequence of straight segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<DVec2>,
}

impl Polyline {
    /// Build a polyline from an ordered vertex list. An empty list yields
    /// an empty polyline; a single point yields a figure with no segments.
    pub fn new(points: Vec<DVec2>) -> Self {
        Polyline { points }
    }

    /// The figure's start point, if any.
    pub fn start(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// All vertices in order, duplicates included.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Iterate over the straight segments as `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Total length of all segments. Coincident consecutive vertices
    /// contribute nothing.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
