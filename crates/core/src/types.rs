use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal directions. Row 0 is the northern edge and column 0 the western edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed iteration order; algorithms that sample from neighbor lists depend on it.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::South => 0b0010,
            Self::East => 0b0100,
            Self::West => 0b1000,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

/// Per-cell classification derived after generation. Never consulted while links are carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Wall,
    Floor,
    Entrance,
    Goal,
    Occupied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BinaryTree,
    AldousBroder,
    RecursiveBacktracker,
    RecursiveDivision,
}

impl Algorithm {
    /// Selection table indexed by the planner's first RNG draw.
    pub const ALL: [Self; 4] =
        [Self::BinaryTree, Self::AldousBroder, Self::RecursiveBacktracker, Self::RecursiveDivision];

    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryTree => "binary-tree",
            Self::AldousBroder => "aldous-broder",
            Self::RecursiveBacktracker => "recursive-backtracker",
            Self::RecursiveDivision => "recursive-division",
        }
    }

    pub(crate) const fn code(self) -> u8 {
        match self {
            Self::BinaryTree => 0,
            Self::AldousBroder => 1,
            Self::RecursiveBacktracker => 2,
            Self::RecursiveDivision => 3,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown algorithm '{raw}' (expected one of: binary-tree, aldous-broder, recursive-backtracker, recursive-division)"
                )
            })
    }
}
