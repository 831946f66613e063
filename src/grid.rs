//! Grid bounds: parsing and the boundary invariant shared with rovers.

use crate::error::Error;
use glam::IVec2;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

// Two non-negative integer tokens; space, tab and newline all count as
// separators. Leading/trailing whitespace is trimmed before matching.
static GRID_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s+([0-9]+)$").expect("grid spec pattern"));

/// The bounded rectangle rovers drive on.
///
/// `length` and `width` are the *inclusive* maximum X and Y coordinates, so
/// the valid coordinate range is `[0, length] × [0, width]`. A `0 0` grid is
/// legal and consists of the single cell `(0, 0)`.
///
/// A grid is parsed once per simulation run and never mutated afterwards;
/// any number of rovers can check their moves against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Inclusive maximum X coordinate.
    pub length: i32,
    /// Inclusive maximum Y coordinate.
    pub width: i32,
}

impl Grid {
    /// Builds a grid directly from already-validated bounds.
    ///
    /// Callers are expected to pass non-negative values; text input should go
    /// through [`FromStr`] instead, which enforces that at the boundary.
    pub fn new(length: i32, width: i32) -> Self {
        Self { length, width }
    }

    /// The shared boundary invariant: `0 <= x <= length && 0 <= y <= width`.
    pub fn contains(&self, position: IVec2) -> bool {
        (0..=self.length).contains(&position.x) && (0..=self.width).contains(&position.y)
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses a grid specification such as `"5 10"`.
    ///
    /// Surrounding whitespace is tolerated and any run of whitespace between
    /// the two tokens is accepted. Anything else (wrong token count, a sign,
    /// non-digit characters, the empty string, values that overflow `i32`)
    /// fails with [`Error::InvalidGridSpec`].
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let caps = GRID_SPEC
            .captures(spec.trim())
            .ok_or(Error::InvalidGridSpec)?;

        let length = caps[1].parse().map_err(|_| Error::InvalidGridSpec)?;
        let width = caps[2].parse().map_err(|_| Error::InvalidGridSpec)?;

        Ok(Self { length, width })
    }
}
