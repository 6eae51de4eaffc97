//! Solver for the two-row wheel flip puzzle: ten tiles in a top and bottom
//! row of five, rearranged by sliding the rows and flipping a wheel over
//! three columns.

pub mod error;
pub mod heuristic;
pub mod input;
pub mod moves;
pub mod puzzle;
pub mod render;
pub mod search;

pub use error::{InputError, SearchError};
pub use input::parse_puzzle;
pub use moves::Move;
pub use puzzle::{Alignment, Arrangement, ArrangementKey, PackedState};
pub use search::{solve, PathNode, Progress, Search, SearchStats, Solution, Status};
