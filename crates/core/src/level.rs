//! Turning a request into a playable level, and the rules gameplay reads back from it.

pub mod model;
pub mod movement;
pub mod planner;
pub mod progression;
pub mod repair;

pub use model::{LevelLayout, LevelSnapshot};
pub use movement::MoveRejection;
pub use planner::{LevelLayoutPlanner, LevelRequest};
pub use progression::{LevelProfile, LevelSequence, MAX_DIFFICULTY, STARTING_DEPTH};
pub use repair::repair_route;

use crate::error::MazeError;

pub fn generate_level(request: &LevelRequest) -> Result<LevelLayout, MazeError> {
    LevelLayoutPlanner::plan(request)
}
