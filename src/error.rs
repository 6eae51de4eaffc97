use thiserror::Error;

use crate::search::SearchStats;

/// Reasons a puzzle line is rejected before it reaches the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid format: Expecting xxxxx-xxxxx (got {len} characters)")]
    WrongLength { len: usize },

    #[error("Invalid format: Expecting '-' between the rows, found '{found}'")]
    MisplacedSeparator { found: char },

    #[error("'{ch}' at position {position} is not a digit")]
    InvalidCharacter { ch: char, position: usize },

    #[error("{0} has appeared twice")]
    DuplicateDigit(u8),

    #[error("{0} is missing")]
    MissingDigit(u8),

    #[error("{0} is not a tile value")]
    OutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every reachable arrangement was expanded without meeting the goal.
    #[error("queue is empty after expanding {} arrangements", .stats.expanded)]
    Exhausted { stats: SearchStats },
}
