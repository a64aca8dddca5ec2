//! The consumer-side JSON point-list format.
//!
//! The external contract is a JSON array of strings, one `"{x},{y}"` entry
//! per output point:
//!
//! ```text
//! ["0,-0","0,-0","0,-4"]
//! ```
//!
//! Coordinates use `f64` `Display` formatting (shortest round-trippable
//! form), so serializing and parsing back is lossless. Sign projection is
//! applied to exact zeros too, so a y-up path renders the origin as
//! `"0,-0"`. Writing the string to a file is the host's job, not this
//! crate's.

use glam::{DVec2, dvec2};
use serde_json::Value;
use thiserror::Error;

/// Errors produced when reading a point list back.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not a JSON array of strings.
    #[error("invalid point list: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry is not of the form `"x,y"`.
    #[error("malformed point entry {index}: {entry:?}")]
    MalformedEntry { index: usize, entry: String },

    /// An entry's coordinate is not a readable number.
    #[error("unreadable coordinate in entry {index}: {entry:?}")]
    UnreadableCoordinate { index: usize, entry: String },
}

/// Serialize an output point sequence to the `"x,y"` JSON array format.
pub fn to_json(points: &[DVec2]) -> String {
    let entries = points
        .iter()
        .map(|p| Value::String(format!("{},{}", p.x, p.y)))
        .collect();
    Value::Array(entries).to_string()
}

/// Parse a `"x,y"` JSON array back into a point sequence.
pub fn from_json(text: &str) -> Result<Vec<DVec2>, ParseError> {
    let entries: Vec<String> = serde_json::from_str(text)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let malformed = || ParseError::MalformedEntry {
                index,
                entry: entry.clone(),
            };
            let (x, y) = entry.split_once(',').ok_or_else(|| malformed())?;
            if y.contains(',') {
                return Err(malformed());
            }
            let parse = |s: &str| {
                s.parse::<f64>().map_err(|_| ParseError::UnreadableCoordinate {
                    index,
                    entry: entry.clone(),
                })
            };
            Ok(dvec2(parse(x)?, parse(y)?))
        })
        .collect()
}
