pub mod error;
pub mod level;
pub mod maze;
pub mod seed;
pub mod types;

pub use error::MazeError;
pub use level::{
    LevelLayout, LevelLayoutPlanner, LevelProfile, LevelRequest, LevelSequence, LevelSnapshot,
    MoveRejection, generate_level,
};
pub use maze::{CellId, DistanceField, Grid, LongestPath, LongestPathFinder};
pub use seed::{LevelRng, derive_level_seed};
pub use types::*;
