use crate::error::MazeError;
use crate::seed::LevelRng;
use crate::types::Pos;

use super::super::grid::Grid;

/// Regions narrower than this in both dimensions may be left open as rooms.
const ROOM_SIZE_THRESHOLD: usize = 5;
/// One in this many eligible regions stops dividing.
const ROOM_CHANCE_DENOMINATOR: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wall runs east-west, cutting passages between a row and the row below it.
    Horizontal,
    /// Wall runs north-south, cutting passages between a column and the column east of it.
    Vertical,
}

/// One wall laid by the division pass, with the single passage left open in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallSplit {
    pub orientation: Orientation,
    /// Row (horizontal) or column (vertical) on the near side of the wall.
    pub line: usize,
    /// First column (horizontal) or row (vertical) the wall covers.
    pub start: usize,
    pub len: usize,
    /// Offset from `start` of the open passage.
    pub passage: usize,
}

impl WallSplit {
    /// Cell pairs straddling the wall, ordered by offset from `start`.
    pub fn crossings(&self) -> impl Iterator<Item = (Pos, Pos)> + use<> {
        let split = *self;
        (split.start..split.start + split.len).map(move |along| match split.orientation {
            Orientation::Horizontal => (Pos::new(split.line, along), Pos::new(split.line + 1, along)),
            Orientation::Vertical => (Pos::new(along, split.line), Pos::new(along, split.line + 1)),
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Region {
    row: usize,
    col: usize,
    height: usize,
    width: usize,
}

/// Opens the whole grid, then walls it off region by region, leaving one passage per wall.
///
/// Regions are processed in the same order a recursive implementation would visit them.
pub fn divide_with_splits(grid: &mut Grid, rng: &mut LevelRng) -> Result<Vec<WallSplit>, MazeError> {
    grid.link_all_neighbors();

    let mut splits = Vec::new();
    let mut pending =
        vec![Region { row: 0, col: 0, height: grid.rows(), width: grid.cols() }];

    while let Some(region) = pending.pop() {
        if region.height <= 1 || region.width <= 1 {
            continue;
        }
        if region.height < ROOM_SIZE_THRESHOLD
            && region.width < ROOM_SIZE_THRESHOLD
            && rng.one_in(ROOM_CHANCE_DENOMINATOR)
        {
            continue;
        }

        let (split, near, far) = if region.height > region.width {
            let offset = rng.index(region.height - 1);
            let passage = rng.index(region.width);
            let near = Region { height: offset + 1, ..region };
            let far = Region {
                row: region.row + offset + 1,
                height: region.height - offset - 1,
                ..region
            };
            let split = WallSplit {
                orientation: Orientation::Horizontal,
                line: region.row + offset,
                start: region.col,
                len: region.width,
                passage,
            };
            (split, near, far)
        } else {
            let offset = rng.index(region.width - 1);
            let passage = rng.index(region.height);
            let near = Region { width: offset + 1, ..region };
            let far = Region {
                col: region.col + offset + 1,
                width: region.width - offset - 1,
                ..region
            };
            let split = WallSplit {
                orientation: Orientation::Vertical,
                line: region.col + offset,
                start: region.row,
                len: region.height,
                passage,
            };
            (split, near, far)
        };

        for (offset, (a, b)) in split.crossings().enumerate() {
            if offset == split.passage {
                continue;
            }
            let a = grid.id_at(a)?;
            let b = grid.id_at(b)?;
            grid.unlink(a, b)?;
        }

        splits.push(split);
        pending.push(far);
        pending.push(near);
    }

    Ok(splits)
}
