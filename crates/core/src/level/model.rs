//! Generated level output handed to rendering and gameplay.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::MazeError;
use crate::maze::{CellId, Grid};
use crate::types::{Algorithm, Direction, Pos, TileKind};

/// A finished level: carved grid, derived tile classes, and the chosen entrance and goal.
///
/// Structure is fixed once built. Gameplay may only overwrite tile occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    grid: Grid,
    tiles: Vec<TileKind>,
    seed: u128,
    algorithm: Algorithm,
    difficulty: u8,
    entrance: Pos,
    goal: Pos,
    used_fallback: bool,
    repaired_links: usize,
}

/// Serializable view of a level for inspection tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Decimal string; JSON consumers rarely handle 128-bit integers.
    pub seed: String,
    pub algorithm: Algorithm,
    pub difficulty: u8,
    pub entrance: Pos,
    pub goal: Pos,
    pub used_fallback: bool,
    pub repaired_links: usize,
    pub fingerprint: String,
    pub tiles: Vec<TileKind>,
    pub links: Vec<(Pos, Pos)>,
}

pub(crate) struct LevelParts {
    pub(crate) grid: Grid,
    pub(crate) seed: u128,
    pub(crate) algorithm: Algorithm,
    pub(crate) difficulty: u8,
    pub(crate) entrance: CellId,
    pub(crate) goal: CellId,
    pub(crate) used_fallback: bool,
    pub(crate) repaired_links: usize,
}

impl LevelLayout {
    pub(crate) fn from_parts(parts: LevelParts) -> Self {
        let entrance = parts.grid.pos_of(parts.entrance);
        let goal = parts.grid.pos_of(parts.goal);
        let mut layout = Self {
            grid: parts.grid,
            tiles: Vec::new(),
            seed: parts.seed,
            algorithm: parts.algorithm,
            difficulty: parts.difficulty,
            entrance,
            goal,
            used_fallback: parts.used_fallback,
            repaired_links: parts.repaired_links,
        };
        let tiles = layout.grid.each_cell().map(|id| layout.derived_tile(id)).collect();
        layout.tiles = tiles;
        layout
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub const fn seed(&self) -> u128 {
        self.seed
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Passed through untouched for collaborators such as monster placement.
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub const fn entrance(&self) -> Pos {
        self.entrance
    }

    pub const fn goal(&self) -> Pos {
        self.goal
    }

    /// True when placement needed its deterministic fallback or the route had to be repaired.
    pub const fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub const fn repaired_links(&self) -> usize {
        self.repaired_links
    }

    /// Out-of-bounds positions read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid
            .cell_at(pos.row, pos.col)
            .map_or(TileKind::Wall, |id| self.tiles[id.index()])
    }

    pub fn occupy(&mut self, pos: Pos) -> Result<(), MazeError> {
        let id = self.grid.id_at(pos)?;
        self.tiles[id.index()] = TileKind::Occupied;
        Ok(())
    }

    /// Clears occupancy, restoring the class the level was generated with.
    pub fn vacate(&mut self, pos: Pos) -> Result<(), MazeError> {
        let id = self.grid.id_at(pos)?;
        self.tiles[id.index()] = self.derived_tile(id);
        Ok(())
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(96 + self.tiles.len() * 2);
        push_count(&mut bytes, self.grid.rows());
        push_count(&mut bytes, self.grid.cols());
        bytes.extend(self.seed.to_le_bytes());
        bytes.push(self.algorithm.code());
        bytes.push(self.difficulty);
        for id in self.grid.each_cell() {
            let cell = self.grid.cell(id);
            bytes.push(
                Direction::ALL
                    .into_iter()
                    .filter(|&direction| cell.is_linked_toward(direction))
                    .fold(0, |acc, direction| acc | direction.bit()),
            );
        }
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
                TileKind::Entrance => 2,
                TileKind::Goal => 3,
                TileKind::Occupied => 4,
            });
        }
        for pos in [self.entrance, self.goal] {
            push_count(&mut bytes, pos.row);
            push_count(&mut bytes, pos.col);
        }
        bytes.push(u8::from(self.used_fallback));
        push_count(&mut bytes, self.repaired_links);
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            seed: self.seed.to_string(),
            algorithm: self.algorithm,
            difficulty: self.difficulty,
            entrance: self.entrance,
            goal: self.goal,
            used_fallback: self.used_fallback,
            repaired_links: self.repaired_links,
            fingerprint: format!("{:016x}", self.fingerprint()),
            tiles: self.tiles.clone(),
            links: self.grid.link_pairs(),
        }
    }

    /// Class a cell gets from structure alone. The entrance wins when it coincides with the goal.
    fn derived_tile(&self, id: CellId) -> TileKind {
        let pos = self.grid.pos_of(id);
        if pos == self.entrance {
            TileKind::Entrance
        } else if pos == self.goal {
            TileKind::Goal
        } else if self.grid.link_count(id) == 0 {
            TileKind::Wall
        } else {
            TileKind::Floor
        }
    }
}

/// Sizes and coordinates are widened to `u64` so no value is truncated.
fn push_count(bytes: &mut Vec<u8>, value: usize) {
    bytes.extend((value as u64).to_le_bytes());
}
