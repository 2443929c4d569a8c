//! Error taxonomy for maze construction, generation, and distance queries.

use std::error::Error;
use std::fmt;

use crate::types::Pos;

/// Describes why a maze operation could not complete.
///
/// Bounds and self-link violations are programmer errors and surface immediately. The planner's
/// fallback and repair paths are not represented here; they are successful outcomes flagged on
/// the generated level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: usize, cols: usize },
    /// Coordinates fall outside the grid.
    InvalidCellReference { row: usize, col: usize },
    /// A cell cannot be linked to itself.
    SelfLink { pos: Pos },
    /// Links may only join spatial neighbors.
    NotAdjacent { from: Pos, to: Pos },
    /// Post-generation check found cells unreachable from the first cell.
    DisconnectedGraph { reachable: usize, total: usize },
    /// A path was requested to a cell the distance field never reached.
    UnreachableCell { pos: Pos },
    /// Backward path walk did not reach the root within `limit` steps.
    PathReconstructionOverflow { limit: usize },
    /// Random walk hit its step cap before visiting every cell.
    WalkStepLimit { steps: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions {rows}x{cols} must both be non-zero")
            }
            Self::InvalidCellReference { row, col } => {
                write!(f, "cell reference ({row}, {col}) is outside the grid")
            }
            Self::SelfLink { pos } => write!(f, "cannot link cell {pos} to itself"),
            Self::NotAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not spatial neighbors")
            }
            Self::DisconnectedGraph { reachable, total } => {
                write!(f, "maze is disconnected: {reachable} of {total} cells reachable")
            }
            Self::UnreachableCell { pos } => {
                write!(f, "cell {pos} is not reachable from the distance root")
            }
            Self::PathReconstructionOverflow { limit } => {
                write!(f, "path reconstruction exceeded {limit} steps")
            }
            Self::WalkStepLimit { steps } => {
                write!(f, "random walk gave up after {steps} steps")
            }
        }
    }
}

impl Error for MazeError {}
