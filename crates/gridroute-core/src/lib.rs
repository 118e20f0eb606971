pub mod error;
pub mod grid;
pub mod mode;
pub mod pathfinder;
pub mod scenario;

pub use error::GridError;
pub use grid::{Cell, CellState, Grid, ENTRY, EXIT, GRID_SIZE};
pub use mode::Mode;
pub use pathfinder::find_path;
pub use scenario::Scenario;
