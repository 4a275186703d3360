//! src/game/config.rs
//!
//! Configuration values for board size and player appearance.

use ratatui::style::Color;

use super::board::Mark;
use super::error::ConfigError;

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 9;

/// How a player's mark is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStyle {
    pub label: String,
    pub color: Color,
}

impl PlayerStyle {
    pub fn new(label: &str, color: Color) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Number of cells along one edge of the square board. Only `new` and
    /// `Default` set it, so it always lies in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    board_size: usize,

    /// Styles for X and O, in that order.
    pub players: [PlayerStyle; 2],
}

impl GameConfig {
    /// Create a `GameConfig` with default player styles.
    ///
    /// Fails when `board_size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSize {
                size: board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            board_size,
            ..Self::default()
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Style for the given mark.
    pub fn style(&self, mark: Mark) -> &PlayerStyle {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            players: [
                PlayerStyle::new("X", Color::Blue),
                PlayerStyle::new("O", Color::Green),
            ],
        }
    }
}
