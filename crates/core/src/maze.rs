//! Maze graph model, carving algorithms, and breadth-first queries.

pub mod algorithms;
pub mod distances;
pub mod grid;
pub mod longest_path;

pub use algorithms::{Orientation, WallSplit, divide_with_splits, step_limit};
pub use distances::DistanceField;
pub use grid::{Cell, CellId, Grid};
pub use longest_path::{LongestPath, LongestPathFinder};
