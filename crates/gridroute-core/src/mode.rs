//! Traversal modes: ordered neighbor-expansion policies for the search.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// A named traversal policy.
///
/// Each mode is an ordered list of unit direction vectors. The order is the
/// tie-break priority the search uses between equally close neighbors, so
/// two modes with the same directions in a different order discover
/// different (equal-length) routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Shortest,
    Safe,
    /// Forward-only: no backward or upward movement, which constrains
    /// reachability on obstructed grids.
    Fast,
}

impl Mode {
    /// Direction vectors (dx, dy) in expansion priority order.
    pub const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            Mode::Shortest => &[(0, 1), (1, 0), (-1, 0), (0, -1)],
            Mode::Safe => &[(1, 0), (0, 1), (-1, 0), (0, -1)],
            Mode::Fast => &[(0, 1), (1, 0)],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Shortest => "shortest",
            Mode::Safe => "safe",
            Mode::Fast => "fast",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GridError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "shortest" => Ok(Mode::Shortest),
            "safe" => Ok(Mode::Safe),
            "fast" => Ok(Mode::Fast),
            other => Err(GridError::UnknownMode(other.to_string())),
        }
    }
}
