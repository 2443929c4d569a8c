//! Two-pass breadth-first diameter approximation.

use crate::error::MazeError;

use super::distances::DistanceField;
use super::grid::{CellId, Grid};

/// Endpoints of an approximately longest shortest path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongestPath {
    /// Farthest cell from the probe the search started at.
    pub start: CellId,
    /// Farthest cell from `start`.
    pub end: CellId,
    pub distance: u32,
}

impl LongestPath {
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn cells(&self, grid: &Grid) -> Result<Vec<CellId>, MazeError> {
        DistanceField::from_root(grid, self.start).path_to(self.end)
    }
}

pub struct LongestPathFinder;

impl LongestPathFinder {
    /// Runs BFS from `probe`, then again from the farthest cell found.
    pub fn find(grid: &Grid, probe: CellId) -> LongestPath {
        let (start, _) = DistanceField::from_root(grid, probe).max();
        let (end, distance) = DistanceField::from_root(grid, start).max();
        LongestPath { start, end, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_probe_from_one_end_finds_the_other() {
        let mut grid = Grid::new(1, 10).expect("valid grid");
        grid.link_all_neighbors();
        let first = grid.cell_at(0, 0).expect("in bounds");
        let last = grid.cell_at(0, 9).expect("in bounds");

        let longest = LongestPathFinder::find(&grid, first);
        assert_eq!(longest.start, last);
        assert_eq!(DistanceField::from_root(&grid, first).get(longest.start), Some(9));
        assert_eq!(longest.end, first);
        assert_eq!(longest.distance, 9);
    }

    #[test]
    fn probe_in_the_middle_still_reaches_both_ends() {
        let mut grid = Grid::new(1, 7).expect("valid grid");
        grid.link_all_neighbors();
        let middle = grid.cell_at(0, 3).expect("in bounds");

        let longest = LongestPathFinder::find(&grid, middle);
        assert_eq!(longest.distance, 6);
        let cells = longest.cells(&grid).expect("endpoints are connected");
        assert_eq!(cells.len(), 7);
    }

    #[test]
    fn isolated_probe_is_degenerate() {
        let grid = Grid::new(2, 2).expect("valid grid");
        let probe = grid.cell_at(1, 0).expect("in bounds");
        let longest = LongestPathFinder::find(&grid, probe);
        assert!(longest.is_degenerate());
        assert_eq!(longest.distance, 0);
    }
}
