//! Breadth-first route search over a grid snapshot.

use crate::error::GridError;
use crate::grid::{Cell, Grid, GRID_SIZE};
use crate::mode::Mode;
use std::collections::VecDeque;

/// Find a route from `start` to `end` under the mode's direction priority.
///
/// Returns `Ok(None)` when no route exists (including a blocked start cell);
/// a start outside the grid is an input error, not a failed search. The grid
/// argument is expected to be a snapshot: the search never observes
/// mutations made after the caller copied it.
///
/// Among routes of equal length, the one returned is fixed by the FIFO
/// frontier combined with the mode's per-node direction order.
pub fn find_path(
    grid: &Grid,
    start: Cell,
    end: Cell,
    mode: Mode,
) -> Result<Option<Vec<Cell>>, GridError> {
    if start.x >= GRID_SIZE || start.y >= GRID_SIZE {
        return Err(GridError::InvalidStart {
            x: start.x,
            y: start.y,
        });
    }
    if end.x >= GRID_SIZE || end.y >= GRID_SIZE {
        return Err(GridError::OutOfBounds { x: end.x, y: end.y });
    }
    if !grid.is_free(start) {
        return Ok(None);
    }

    let mut visited = [[false; GRID_SIZE]; GRID_SIZE];
    let mut parent: [[Option<Cell>; GRID_SIZE]; GRID_SIZE] = [[None; GRID_SIZE]; GRID_SIZE];
    let mut frontier = VecDeque::new();

    visited[start.x][start.y] = true;
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell == end {
            return Ok(Some(reconstruct(&parent, start, end)));
        }
        for &(dx, dy) in mode.directions() {
            let nx = cell.x as isize + dx;
            let ny = cell.y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= GRID_SIZE || ny as usize >= GRID_SIZE {
                continue;
            }
            let next = Cell::new(nx as usize, ny as usize);
            if visited[next.x][next.y] || !grid.is_free(next) {
                continue;
            }
            visited[next.x][next.y] = true;
            parent[next.x][next.y] = Some(cell);
            frontier.push_back(next);
        }
    }

    Ok(None)
}

/// Walk the predecessor links back from the goal. Every visited cell except
/// the start has a parent, so the walk always terminates at `start`.
fn reconstruct(
    parent: &[[Option<Cell>; GRID_SIZE]; GRID_SIZE],
    start: Cell,
    end: Cell,
) -> Vec<Cell> {
    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        match parent[cursor.x][cursor.y] {
            Some(previous) => {
                path.push(previous);
                cursor = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
