//! Depth progression: per-depth sizing and seeds for a run of successive levels.

use crate::error::MazeError;
use crate::seed::derive_level_seed;
use crate::types::Algorithm;

use super::model::LevelLayout;
use super::planner::{LevelLayoutPlanner, LevelRequest};

pub const STARTING_DEPTH: u32 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// Grid size (rows, cols) by depth; depths past the end reuse the last entry.
const SIZE_BY_DEPTH: [(usize, usize); 5] = [(8, 8), (10, 10), (12, 12), (14, 16), (16, 20)];

/// Size and difficulty of the level at one depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelProfile {
    pub depth: u32,
    pub rows: usize,
    pub cols: usize,
    pub difficulty: u8,
}

impl LevelProfile {
    pub fn for_depth(depth: u32) -> Self {
        let slot = depth_slot(depth);
        let (rows, cols) = SIZE_BY_DEPTH[slot.min(SIZE_BY_DEPTH.len() - 1)];
        let difficulty = u8::try_from(depth.max(STARTING_DEPTH)).map_or(MAX_DIFFICULTY, |d| {
            d.min(MAX_DIFFICULTY)
        });
        Self { depth, rows, cols, difficulty }
    }

    pub fn level_request(&self, run_seed: u128) -> LevelRequest {
        LevelRequest::new(self.rows, self.cols, derive_level_seed(run_seed, self.depth))
            .with_difficulty(self.difficulty)
    }
}

/// Successive levels of one run, starting at [`STARTING_DEPTH`].
///
/// The same run seed always yields the same sequence.
#[derive(Clone, Debug)]
pub struct LevelSequence {
    run_seed: u128,
    next_depth: u32,
    algorithm: Option<Algorithm>,
}

impl LevelSequence {
    pub const fn new(run_seed: u128) -> Self {
        Self { run_seed, next_depth: STARTING_DEPTH, algorithm: None }
    }

    /// Forces every level in the run to use one algorithm.
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub const fn next_depth(&self) -> u32 {
        self.next_depth
    }

    fn request_for(&self, depth: u32) -> LevelRequest {
        let request = LevelProfile::for_depth(depth).level_request(self.run_seed);
        match self.algorithm {
            Some(algorithm) => request.with_algorithm(algorithm),
            None => request,
        }
    }
}

impl Iterator for LevelSequence {
    type Item = Result<LevelLayout, MazeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let depth = self.next_depth;
        self.next_depth = depth.checked_add(1)?;
        Some(LevelLayoutPlanner::plan(&self.request_for(depth)))
    }
}

fn depth_slot(depth: u32) -> usize {
    depth.saturating_sub(STARTING_DEPTH) as usize
}
