//! Cell arena and link bookkeeping for rectangular mazes.
//! This module exists so every generator and query shares one adjacency model.
//! It does not own generation policy or level classification.

use crate::error::MazeError;
use crate::seed::LevelRng;
use crate::types::{Direction, Pos};

use super::distances::DistanceField;

/// Index of a cell inside the [`Grid`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    neighbors: [Option<CellId>; 4],
    links: u8,
}

impl Cell {
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub const fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.slot()]
    }

    /// Spatial neighbors in north, south, east, west order.
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        Direction::ALL.into_iter().filter_map(|direction| self.neighbor(direction))
    }

    pub const fn is_linked_toward(&self, direction: Direction) -> bool {
        self.links & direction.bit() != 0
    }

    /// Linked neighbors in north, south, east, west order.
    pub fn linked_neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_linked_toward(direction))
            .filter_map(|direction| self.neighbor(direction))
    }

    pub const fn link_count(&self) -> usize {
        self.links.count_ones() as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let count = rows.checked_mul(cols).ok_or(MazeError::InvalidDimensions { rows, cols })?;
        let mut cells = Vec::with_capacity(count);
        for row in 0..rows {
            for col in 0..cols {
                let north = (row > 0).then(|| CellId((row - 1) * cols + col));
                let south = (row + 1 < rows).then(|| CellId((row + 1) * cols + col));
                let east = (col + 1 < cols).then(|| CellId(row * cols + col + 1));
                let west = (col > 0).then(|| CellId(row * cols + col - 1));
                cells.push(Cell {
                    pos: Pos { row, col },
                    neighbors: [north, south, east, west],
                    links: 0,
                });
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellId> {
        (row < self.rows && col < self.cols).then(|| CellId(row * self.cols + col))
    }

    pub fn try_cell_at(&self, row: usize, col: usize) -> Result<CellId, MazeError> {
        self.cell_at(row, col).ok_or(MazeError::InvalidCellReference { row, col })
    }

    pub fn id_at(&self, pos: Pos) -> Result<CellId, MazeError> {
        self.try_cell_at(pos.row, pos.col)
    }

    /// # Panics
    ///
    /// Panics when `id` came from a larger grid.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// # Panics
    ///
    /// Panics when `id` came from a larger grid, like [`Grid::cell`].
    pub fn pos_of(&self, id: CellId) -> Pos {
        self.cell(id).pos
    }

    pub fn random_cell(&self, rng: &mut LevelRng) -> CellId {
        CellId(rng.index(self.cells.len()))
    }

    /// Every cell in row-major order. Generators that draw per cell rely on this order.
    pub fn each_cell(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.cells.len()).map(CellId)
    }

    /// # Panics
    ///
    /// Panics when `id` came from a larger grid.
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cell(id).neighbor(direction)
    }

    /// Spatial neighbors in N, S, E, W order.
    ///
    /// # Panics
    ///
    /// Panics when `id` came from a larger grid.
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.cell(id).neighbors()
    }

    /// # Panics
    ///
    /// Panics when `id` came from a larger grid.
    pub fn links(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.cell(id).linked_neighbors()
    }

    /// # Panics
    ///
    /// Panics when `id` came from a larger grid.
    pub fn link_count(&self, id: CellId) -> usize {
        self.cell(id).link_count()
    }

    /// False for foreign ids rather than a panic.
    pub fn is_linked(&self, a: CellId, b: CellId) -> bool {
        self.direction_between(a, b).is_some_and(|direction| self.cell(a).is_linked_toward(direction))
    }

    pub fn link(&mut self, a: CellId, b: CellId) -> Result<(), MazeError> {
        let direction = self.checked_direction(a, b)?;
        self.cells[a.0].links |= direction.bit();
        self.cells[b.0].links |= direction.opposite().bit();
        Ok(())
    }

    /// Removes the passage between `a` and `b`, returning whether one existed.
    pub fn unlink(&mut self, a: CellId, b: CellId) -> Result<bool, MazeError> {
        let direction = self.checked_direction(a, b)?;
        let existed = self.cell(a).is_linked_toward(direction);
        self.cells[a.0].links &= !direction.bit();
        self.cells[b.0].links &= !direction.opposite().bit();
        Ok(existed)
    }

    /// Opens every passage, leaving a grid with no interior walls.
    pub fn link_all_neighbors(&mut self) {
        for cell in &mut self.cells {
            let open = Direction::ALL
                .into_iter()
                .filter(|&direction| cell.neighbor(direction).is_some())
                .fold(0, |acc, direction| acc | direction.bit());
            cell.links = open;
        }
    }

    pub fn total_links(&self) -> usize {
        self.cells.iter().map(Cell::link_count).sum::<usize>() / 2
    }

    pub fn dead_ends(&self) -> Vec<CellId> {
        self.each_cell().filter(|&id| self.link_count(id) == 1).collect()
    }

    /// Each link once, as `(north-or-west cell, south-or-east cell)`, sorted row-major.
    pub fn link_pairs(&self) -> Vec<(Pos, Pos)> {
        let mut pairs = Vec::with_capacity(self.total_links());
        for cell in &self.cells {
            for direction in [Direction::South, Direction::East] {
                if !cell.is_linked_toward(direction) {
                    continue;
                }
                if let Some(other) = cell.neighbor(direction) {
                    pairs.push((cell.pos, self.pos_of(other)));
                }
            }
        }
        pairs.sort();
        pairs
    }

    /// Confirms every cell is reachable over links from the first cell.
    pub fn verify_connected(&self) -> Result<(), MazeError> {
        let field = DistanceField::from_root(self, CellId(0));
        let reachable = field.len();
        let total = self.cell_count();
        if reachable == total {
            Ok(())
        } else {
            Err(MazeError::DisconnectedGraph { reachable, total })
        }
    }

    fn direction_between(&self, a: CellId, b: CellId) -> Option<Direction> {
        let cell = self.cells.get(a.0)?;
        Direction::ALL.into_iter().find(|&direction| cell.neighbor(direction) == Some(b))
    }

    fn checked_direction(&self, a: CellId, b: CellId) -> Result<Direction, MazeError> {
        let from = self.checked_pos(a)?;
        let to = self.checked_pos(b)?;
        if a == b {
            return Err(MazeError::SelfLink { pos: from });
        }
        self.direction_between(a, b).ok_or(MazeError::NotAdjacent { from, to })
    }

    fn checked_pos(&self, id: CellId) -> Result<Pos, MazeError> {
        self.cells.get(id.0).map(Cell::pos).ok_or(MazeError::InvalidCellReference {
            row: id.0 / self.cols,
            col: id.0 % self.cols,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(grid: &Grid, row: usize, col: usize) -> CellId {
        grid.cell_at(row, col).expect("fixture coordinates are in bounds")
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert_eq!(Grid::new(0, 4), Err(MazeError::InvalidDimensions { rows: 0, cols: 4 }));
        assert_eq!(Grid::new(3, 0), Err(MazeError::InvalidDimensions { rows: 3, cols: 0 }));
    }

    #[test]
    fn dimensions_whose_cell_count_overflows_are_rejected() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(Grid::new(rows, 2), Err(MazeError::InvalidDimensions { rows, cols: 2 }));
        assert_eq!(
            Grid::new(usize::MAX, usize::MAX),
            Err(MazeError::InvalidDimensions { rows: usize::MAX, cols: usize::MAX })
        );
    }

    #[test]
    #[should_panic]
    fn accessors_panic_on_ids_from_a_larger_grid() {
        let large = Grid::new(4, 4).expect("valid grid");
        let small = Grid::new(2, 2).expect("valid grid");
        let foreign = cell(&large, 3, 3);
        let _ = small.pos_of(foreign);
    }

    #[test]
    fn foreign_ids_are_never_linked() {
        let large = Grid::new(4, 4).expect("valid grid");
        let small = Grid::new(2, 2).expect("valid grid");
        assert!(!small.is_linked(cell(&large, 3, 3), cell(&small, 0, 0)));
    }

    #[test]
    fn spatial_neighbors_are_mutually_consistent() {
        let grid = Grid::new(4, 5).expect("valid grid");
        for id in grid.each_cell() {
            for direction in Direction::ALL {
                if let Some(other) = grid.neighbor(id, direction) {
                    assert_eq!(
                        grid.neighbor(other, direction.opposite()),
                        Some(id),
                        "{direction:?} of {} must point back",
                        grid.pos_of(id)
                    );
                }
            }
        }
    }

    #[test]
    fn corner_and_edge_cells_have_fewer_neighbors() {
        let grid = Grid::new(3, 3).expect("valid grid");
        assert_eq!(grid.neighbors(cell(&grid, 0, 0)).count(), 2);
        assert_eq!(grid.neighbors(cell(&grid, 0, 1)).count(), 3);
        assert_eq!(grid.neighbors(cell(&grid, 1, 1)).count(), 4);
        assert_eq!(grid.neighbor(cell(&grid, 0, 0), Direction::North), None);
        assert_eq!(grid.neighbor(cell(&grid, 2, 2), Direction::East), None);
    }

    #[test]
    fn cell_at_is_bounds_checked() {
        let grid = Grid::new(2, 3).expect("valid grid");
        assert!(grid.cell_at(1, 2).is_some());
        assert_eq!(grid.cell_at(2, 0), None);
        assert_eq!(grid.cell_at(0, 3), None);
        assert_eq!(grid.try_cell_at(5, 1), Err(MazeError::InvalidCellReference { row: 5, col: 1 }));
    }

    #[test]
    fn each_cell_walks_row_major() {
        let grid = Grid::new(2, 3).expect("valid grid");
        let order: Vec<Pos> = grid.each_cell().map(|id| grid.pos_of(id)).collect();
        assert_eq!(
            order,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
            ]
        );
    }

    #[test]
    fn link_is_symmetric_and_unlink_removes_both_sides() {
        let mut grid = Grid::new(2, 2).expect("valid grid");
        let a = cell(&grid, 0, 0);
        let b = cell(&grid, 0, 1);

        grid.link(a, b).expect("neighbors can link");
        assert!(grid.is_linked(a, b));
        assert!(grid.is_linked(b, a));
        assert_eq!(grid.total_links(), 1);

        assert_eq!(grid.unlink(b, a), Ok(true));
        assert!(!grid.is_linked(a, b));
        assert!(!grid.is_linked(b, a));
        assert_eq!(grid.unlink(a, b), Ok(false), "second unlink finds nothing to remove");
    }

    #[test]
    fn self_link_is_rejected() {
        let mut grid = Grid::new(2, 2).expect("valid grid");
        let a = cell(&grid, 1, 1);
        assert_eq!(grid.link(a, a), Err(MazeError::SelfLink { pos: Pos::new(1, 1) }));
        assert_eq!(grid.link_count(a), 0);
    }

    #[test]
    fn non_adjacent_link_is_rejected() {
        let mut grid = Grid::new(3, 3).expect("valid grid");
        let a = cell(&grid, 0, 0);
        let b = cell(&grid, 1, 1);
        assert_eq!(
            grid.link(a, b),
            Err(MazeError::NotAdjacent { from: Pos::new(0, 0), to: Pos::new(1, 1) })
        );
        assert!(!grid.is_linked(a, b));
    }

    #[test]
    fn ids_from_a_larger_grid_are_invalid_references() {
        let large = Grid::new(5, 5).expect("valid grid");
        let mut small = Grid::new(2, 2).expect("valid grid");
        let far = cell(&large, 4, 4);
        let near = cell(&small, 0, 0);
        assert!(matches!(small.link(near, far), Err(MazeError::InvalidCellReference { .. })));
        assert!(!small.is_linked(near, far));
    }

    #[test]
    fn link_all_neighbors_opens_every_interior_wall() {
        let mut grid = Grid::new(3, 4).expect("valid grid");
        grid.link_all_neighbors();
        // 3 rows * 3 horizontal passages + 2 * 4 vertical passages
        assert_eq!(grid.total_links(), 17);
        for id in grid.each_cell() {
            assert_eq!(grid.link_count(id), grid.neighbors(id).count());
        }
        assert!(grid.verify_connected().is_ok());
    }

    #[test]
    fn link_pairs_lists_each_passage_once_in_row_major_order() {
        let mut grid = Grid::new(2, 2).expect("valid grid");
        let top_right = cell(&grid, 0, 1);
        let bottom_right = cell(&grid, 1, 1);
        let top_left = cell(&grid, 0, 0);
        grid.link(bottom_right, top_right).expect("neighbors can link");
        grid.link(top_right, top_left).expect("neighbors can link");

        assert_eq!(
            grid.link_pairs(),
            vec![(Pos::new(0, 0), Pos::new(0, 1)), (Pos::new(0, 1), Pos::new(1, 1))]
        );
        assert_eq!(grid.dead_ends(), vec![top_left, bottom_right]);
    }

    #[test]
    fn unlinked_grid_reports_disconnection() {
        let grid = Grid::new(2, 3).expect("valid grid");
        assert_eq!(
            grid.verify_connected(),
            Err(MazeError::DisconnectedGraph { reachable: 1, total: 6 })
        );
    }

    #[test]
    fn single_cell_grid_is_trivially_connected() {
        let grid = Grid::new(1, 1).expect("valid grid");
        assert!(grid.verify_connected().is_ok());
    }

    #[test]
    fn random_cell_stays_in_bounds_and_is_reproducible() {
        let grid = Grid::new(4, 4).expect("valid grid");
        let mut left = LevelRng::from_seed(7);
        let mut right = LevelRng::from_seed(7);
        for _ in 0..64 {
            let drawn = grid.random_cell(&mut left);
            assert!(drawn.index() < grid.cell_count());
            assert_eq!(drawn, grid.random_cell(&mut right));
        }
    }
}
