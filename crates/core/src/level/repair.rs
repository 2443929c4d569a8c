//! Corrective linking that guarantees a route between two cells.

use crate::error::MazeError;
use crate::maze::{CellId, DistanceField, Grid};
use crate::types::Direction;

/// Links a Manhattan-descending chain from `from` to `to`, returning how many links were added.
///
/// Rows close first, then columns. Existing links along the chain are kept as they are.
pub fn repair_route(grid: &mut Grid, from: CellId, to: CellId) -> Result<usize, MazeError> {
    let target = grid.pos_of(to);
    let mut current = from;
    let mut added = 0_usize;

    for _ in 0..grid.cell_count() {
        let here = grid.pos_of(current);
        let direction = if here.row > target.row {
            Direction::North
        } else if here.row < target.row {
            Direction::South
        } else if here.col < target.col {
            Direction::East
        } else if here.col > target.col {
            Direction::West
        } else {
            return Ok(added);
        };

        let Some(next) = grid.neighbor(current, direction) else {
            break;
        };
        if !grid.is_linked(current, next) {
            grid.link(current, next)?;
            added += 1;
        }
        current = next;
    }

    if current == to {
        Ok(added)
    } else {
        let reachable = DistanceField::from_root(grid, from).len();
        Err(MazeError::DisconnectedGraph { reachable, total: grid.cell_count() })
    }
}

/// Returns the number of links added; zero when `goal` was already reachable.
pub(crate) fn ensure_route(grid: &mut Grid, entrance: CellId, goal: CellId) -> Result<usize, MazeError> {
    let reachable = DistanceField::from_root(grid, entrance).contains(goal);
    if reachable {
        return Ok(0);
    }
    repair_route(grid, entrance, goal)
}
