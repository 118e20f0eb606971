//! In-memory grid store behind a single read-write lock.
//!
//! Mutations and the snapshot they return happen under one write-lock
//! acquisition, so a caller always sees the grid exactly as its own change
//! left it. Searches run on snapshots and never hold the lock.

use gridroute_core::{Grid, GridError, Scenario};
use std::sync::{PoisonError, RwLock};

/// Application state: the process-wide shared grid.
pub struct AppState {
    grid: RwLock<Grid>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            grid: RwLock::new(Grid::new()),
        }
    }

    /// Immutable copy of the current grid for a lock-free search.
    pub fn snapshot(&self) -> Grid {
        self.read().clone()
    }

    /// Flip one cell and return the resulting snapshot. The entry and exit
    /// corners are left untouched.
    pub fn toggle(&self, x: usize, y: usize) -> Result<Grid, GridError> {
        let mut grid = self.write();
        grid.toggle(x, y)?;
        Ok(grid.clone())
    }

    /// Rebuild the grid from a named layout and return the resulting
    /// snapshot.
    pub fn apply_scenario(&self, scenario: Scenario) -> Grid {
        let mut grid = self.write();
        scenario.apply(&mut grid);
        grid.clone()
    }

    // No code can panic while holding the lock, so a poisoned guard still
    // holds a structurally valid grid.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Grid> {
        self.grid.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Grid> {
        self.grid.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
