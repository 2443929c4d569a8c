use crate::error::MazeError;
use crate::seed::LevelRng;
use crate::types::Direction;

use super::super::grid::Grid;

/// Links each cell north or east. Only cells with both options draw from the stream, so the
/// northern row and eastern column are straight corridors.
pub(super) fn carve(grid: &mut Grid, rng: &mut LevelRng) -> Result<(), MazeError> {
    for cell in grid.each_cell() {
        let north = grid.neighbor(cell, Direction::North);
        let east = grid.neighbor(cell, Direction::East);
        let target = match (north, east) {
            (Some(north), Some(east)) => {
                if rng.coin() {
                    north
                } else {
                    east
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => continue,
        };
        grid.link(cell, target)?;
    }
    Ok(())
}
