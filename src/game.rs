//! src/game.rs
//!
//! Top-level `game` module exposing the rules, configuration and errors.

pub mod board;
pub mod config;
pub mod error;
pub mod state;

/// Re-exports
pub use board::{Board, Line, Mark};
pub use config::{GameConfig, PlayerStyle};
pub use error::{ConfigError, MoveError};
pub use state::{Game, Move, Outcome, Scores, SharedGame, shared};
