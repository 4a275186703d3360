use thiserror::Error;

/// Reasons a move is refused. A refused move leaves the game untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("the round is over; start a new game")]
    RoundOver,
}

/// Invalid startup configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is not supported (expected {min}..={max})")]
    BoardSize { size: usize, min: usize, max: usize },
}
