//! Breadth-first distance fields over the link graph.

use std::collections::VecDeque;

use crate::error::MazeError;

use super::grid::{CellId, Grid};

/// Link distances from one root cell. Cells the search never reached have no entry.
///
/// The field borrows its grid, so links cannot change while distances are in use.
#[derive(Clone, Debug)]
pub struct DistanceField<'a> {
    grid: &'a Grid,
    root: CellId,
    distances: Vec<Option<u32>>,
    discovery_order: Vec<CellId>,
}

impl<'a> DistanceField<'a> {
    /// # Panics
    ///
    /// Panics when `root` does not belong to `grid`.
    pub fn from_root(grid: &'a Grid, root: CellId) -> Self {
        let mut distances = vec![None; grid.cell_count()];
        let mut discovery_order = Vec::with_capacity(grid.cell_count());
        let mut frontier = VecDeque::from([root]);
        distances[root.index()] = Some(0_u32);
        discovery_order.push(root);

        while let Some(current) = frontier.pop_front() {
            let next_distance = distances[current.index()].unwrap_or_default() + 1;
            for neighbor in grid.links(current) {
                if distances[neighbor.index()].is_some() {
                    continue;
                }
                distances[neighbor.index()] = Some(next_distance);
                discovery_order.push(neighbor);
                frontier.push_back(neighbor);
            }
        }

        Self { grid, root, distances, discovery_order }
    }

    pub const fn root(&self) -> CellId {
        self.root
    }

    pub fn get(&self, cell: CellId) -> Option<u32> {
        self.distances.get(cell.index()).copied().flatten()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.get(cell).is_some()
    }

    /// Number of reachable cells, root included.
    pub fn len(&self) -> usize {
        self.discovery_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovery_order.is_empty()
    }

    /// Reachable cells with their distances, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, u32)> + '_ {
        self.discovery_order
            .iter()
            .map(|&cell| (cell, self.distances[cell.index()].unwrap_or_default()))
    }

    /// Farthest reachable cell; ties go to whichever was discovered first.
    pub fn max(&self) -> (CellId, u32) {
        let mut best = (self.root, 0_u32);
        for (cell, distance) in self.iter() {
            if distance > best.1 {
                best = (cell, distance);
            }
        }
        best
    }

    /// Shortest path from the root to `goal`, both ends included.
    ///
    /// Walks backward from `goal` along links whose distance drops by one. The walk is capped at
    /// the grid's cell count.
    pub fn path_to(&self, goal: CellId) -> Result<Vec<CellId>, MazeError> {
        let Some(goal_distance) = self.get(goal) else {
            let pos = if goal.index() < self.grid.cell_count() {
                self.grid.pos_of(goal)
            } else {
                return Err(MazeError::InvalidCellReference {
                    row: goal.index() / self.grid.cols(),
                    col: goal.index() % self.grid.cols(),
                });
            };
            return Err(MazeError::UnreachableCell { pos });
        };

        let limit = self.grid.cell_count();
        let mut path = Vec::with_capacity(goal_distance as usize + 1);
        let mut current = goal;
        let mut current_distance = goal_distance;
        path.push(current);

        for _ in 0..limit {
            if current == self.root {
                path.reverse();
                return Ok(path);
            }
            let Some(previous) = self
                .grid
                .links(current)
                .find(|&neighbor| self.get(neighbor) == current_distance.checked_sub(1))
            else {
                break;
            };
            current = previous;
            current_distance -= 1;
            path.push(current);
        }

        Err(MazeError::PathReconstructionOverflow { limit })
    }
}
