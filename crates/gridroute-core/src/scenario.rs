//! Deterministic obstacle layouts for seeding demo grids.

use crate::error::GridError;
use crate::grid::{CellState, Grid, GRID_SIZE};
use std::fmt;
use std::str::FromStr;

/// A named obstacle pattern. Applying one fully replaces the grid contents;
/// the same name always produces the identical obstacle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Two obstacle lines crossing at (5, 5), offset from the border.
    Urban,
    /// Diagonal stripes covering roughly a third of the interior.
    Dense,
    /// No obstacles.
    Open,
}

impl Scenario {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scenario::Urban => "urban",
            Scenario::Dense => "dense",
            Scenario::Open => "open",
        }
    }

    /// Rebuild the grid from this layout. The formulas never touch the
    /// entry or exit corners.
    pub fn apply(self, grid: &mut Grid) {
        grid.reset();
        match self {
            Scenario::Urban => {
                for i in 3..GRID_SIZE - 3 {
                    grid.set_cell(i, 5, CellState::Blocked);
                    grid.set_cell(5, i, CellState::Blocked);
                }
            }
            Scenario::Dense => {
                for i in 1..GRID_SIZE - 1 {
                    for j in 1..GRID_SIZE - 1 {
                        if (i + j) % 3 == 0 {
                            grid.set_cell(i, j, CellState::Blocked);
                        }
                    }
                }
            }
            Scenario::Open => {}
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = GridError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "urban" => Ok(Scenario::Urban),
            "dense" => Ok(Scenario::Dense),
            "open" => Ok(Scenario::Open),
            other => Err(GridError::UnknownScenario(other.to_string())),
        }
    }
}
