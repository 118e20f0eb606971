//! Error taxonomy for grid access and route planning.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate access outside the grid.
    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: usize, y: usize },
    /// Route start outside the grid. Distinct from an unreachable exit,
    /// which is a normal negative result rather than an error.
    #[error("start position ({x}, {y}) is out of bounds")]
    InvalidStart { x: usize, y: usize },
    #[error("unknown route mode '{0}'")]
    UnknownMode(String),
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
}
