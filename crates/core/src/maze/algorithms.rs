//! Generation algorithms that carve links into a fresh grid.
//! This module exists so the planner can dispatch on [`Algorithm`] without knowing each carver.
//! It does not own algorithm selection or entrance/goal placement.

mod aldous_broder;
mod binary_tree;
mod recursive_backtracker;
mod recursive_division;

pub use aldous_broder::step_limit;
pub use recursive_division::{Orientation, WallSplit, divide_with_splits};

use crate::error::MazeError;
use crate::seed::LevelRng;
use crate::types::Algorithm;

use super::grid::Grid;

impl Algorithm {
    /// Carves links into `grid` in place.
    ///
    /// Expects a grid with no links; every algorithm leaves a structure that reaches every cell.
    pub fn generate(self, grid: &mut Grid, rng: &mut LevelRng) -> Result<(), MazeError> {
        match self {
            Self::BinaryTree => binary_tree::carve(grid, rng),
            Self::AldousBroder => aldous_broder::carve(grid, rng),
            Self::RecursiveBacktracker => recursive_backtracker::carve(grid, rng),
            Self::RecursiveDivision => divide_with_splits(grid, rng).map(|_| ()),
        }
    }
}
