use std::error::Error;
use std::fmt;

use crate::types::{Pos, TileKind};

use super::model::LevelLayout;

/// Why a single-step move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    OutOfBounds(Pos),
    NotAdjacent { from: Pos, to: Pos },
    Walled { from: Pos, to: Pos },
    Occupied(Pos),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(pos) => write!(f, "{pos} is outside the level"),
            Self::NotAdjacent { from, to } => write!(f, "{to} is not next to {from}"),
            Self::Walled { from, to } => write!(f, "a wall separates {from} and {to}"),
            Self::Occupied(pos) => write!(f, "{pos} is occupied"),
        }
    }
}

impl Error for MoveRejection {}

impl LevelLayout {
    /// A move is legal when `to` is a spatial neighbor of `from`, linked to it, and unoccupied.
    pub fn check_move(&self, from: Pos, to: Pos) -> Result<(), MoveRejection> {
        let grid = self.grid();
        let source = grid.cell_at(from.row, from.col).ok_or(MoveRejection::OutOfBounds(from))?;
        let destination = grid.cell_at(to.row, to.col).ok_or(MoveRejection::OutOfBounds(to))?;

        if !grid.neighbors(source).any(|neighbor| neighbor == destination) {
            return Err(MoveRejection::NotAdjacent { from, to });
        }
        if !grid.is_linked(source, destination) {
            return Err(MoveRejection::Walled { from, to });
        }
        if self.tile_at(to) == TileKind::Occupied {
            return Err(MoveRejection::Occupied(to));
        }
        Ok(())
    }

    pub fn can_move(&self, from: Pos, to: Pos) -> bool {
        self.check_move(from, to).is_ok()
    }
}
