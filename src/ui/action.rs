//! src/ui/action.rs
//!
//! What a key press or a click asks the game to do.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Mark a cell for the current player.
    Place { row: usize, col: usize },
    /// Mark the cell under the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor by a row/column delta.
    MoveCursor { d_row: i32, d_col: i32 },
    /// Clear the board, keep the scores.
    Restart,
    Quit,
}
