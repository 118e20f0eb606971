//! Fixed-size obstacle grid shared by all route requests.

use crate::error::GridError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Side length of the square grid.
pub const GRID_SIZE: usize = 15;

/// Fixed route origin. Never blockable.
pub const ENTRY: Cell = Cell { x: 0, y: 0 };

/// Fixed route destination. Never blockable.
pub const EXIT: Cell = Cell {
    x: GRID_SIZE - 1,
    y: GRID_SIZE - 1,
};

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Free,
    Blocked,
}

/// The 15x15 occupancy matrix.
///
/// Serializes as the wire format the frontend expects: a row-major array of
/// rows, each cell 0 (free) or 1 (blocked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An all-free grid.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Free; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Replace every cell with `Free`.
    pub fn reset(&mut self) {
        self.cells = [[CellState::Free; GRID_SIZE]; GRID_SIZE];
    }

    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.cells[x][y])
    }

    /// Set or clear an obstacle. Silently ignored for the entry and exit
    /// corners so a route endpoint can never be walled off.
    pub fn set_blocked(&mut self, x: usize, y: usize, blocked: bool) -> Result<(), GridError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(GridError::OutOfBounds { x, y });
        }
        let cell = Cell::new(x, y);
        if cell == ENTRY || cell == EXIT {
            return Ok(());
        }
        self.cells[x][y] = if blocked {
            CellState::Blocked
        } else {
            CellState::Free
        };
        Ok(())
    }

    /// Flip one cell between free and blocked, preserving the entry/exit
    /// exemption.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let current = self.get(x, y)?;
        self.set_blocked(x, y, current == CellState::Free)
    }

    /// Whether an in-bounds cell is walkable. Out-of-bounds cells are not.
    pub fn is_free(&self, cell: Cell) -> bool {
        cell.x < GRID_SIZE && cell.y < GRID_SIZE && self.cells[cell.x][cell.y] == CellState::Free
    }

    pub(crate) fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[x][y] = state;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut rows = serializer.serialize_seq(Some(GRID_SIZE))?;
        for row in &self.cells {
            let encoded: Vec<u8> = row
                .iter()
                .map(|cell| match cell {
                    CellState::Free => 0,
                    CellState::Blocked => 1,
                })
                .collect();
            rows.serialize_element(&encoded)?;
        }
        rows.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        if rows.len() != GRID_SIZE {
            return Err(de::Error::invalid_length(rows.len(), &"15 rows"));
        }
        let mut grid = Grid::new();
        for (x, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(de::Error::invalid_length(row.len(), &"15 cells per row"));
            }
            for (y, &value) in row.iter().enumerate() {
                grid.cells[x][y] = match value {
                    0 => CellState::Free,
                    1 => CellState::Blocked,
                    other => {
                        return Err(de::Error::custom(format!(
                            "cell value {other} is not 0 or 1"
                        )))
                    }
                };
            }
        }
        Ok(grid)
    }
}
