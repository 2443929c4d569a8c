use crate::error::MazeError;
use crate::seed::LevelRng;

use super::super::grid::{CellId, Grid};

/// Step cap for the random walk. Expected cover time on grids is far below this, so hitting it
/// means the walk is broken rather than unlucky.
pub fn step_limit(cell_count: usize) -> usize {
    cell_count.saturating_mul(cell_count).saturating_mul(8).max(1_024)
}

/// Unbiased random walk: the first entry into a cell with no links carves the edge walked.
pub(super) fn carve(grid: &mut Grid, rng: &mut LevelRng) -> Result<(), MazeError> {
    let limit = step_limit(grid.cell_count());
    carve_with_limit(grid, rng, limit)
}

fn carve_with_limit(grid: &mut Grid, rng: &mut LevelRng, limit: usize) -> Result<(), MazeError> {
    let mut current = grid.random_cell(rng);
    let mut unvisited = grid.cell_count() - 1;
    let mut steps = 0_usize;
    let mut choices: Vec<CellId> = Vec::with_capacity(4);

    while unvisited > 0 {
        if steps >= limit {
            return Err(MazeError::WalkStepLimit { steps });
        }
        choices.clear();
        choices.extend(grid.neighbors(current));
        let next = choices[rng.index(choices.len())];
        if grid.link_count(next) == 0 {
            grid.link(current, next)?;
            unvisited -= 1;
        }
        current = next;
        steps += 1;
    }

    Ok(())
}
