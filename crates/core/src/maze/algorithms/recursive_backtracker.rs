use crate::error::MazeError;
use crate::seed::LevelRng;

use super::super::grid::{CellId, Grid};

/// Depth-first carve with an explicit stack; a cell with no links counts as unvisited.
pub(super) fn carve(grid: &mut Grid, rng: &mut LevelRng) -> Result<(), MazeError> {
    let mut stack = vec![grid.random_cell(rng)];
    let mut unvisited: Vec<CellId> = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        unvisited.clear();
        unvisited.extend(grid.neighbors(current).filter(|&neighbor| grid.link_count(neighbor) == 0));
        if unvisited.is_empty() {
            stack.pop();
            continue;
        }
        let next = unvisited[rng.index(unvisited.len())];
        grid.link(current, next)?;
        stack.push(next);
    }

    Ok(())
}
