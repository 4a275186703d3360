//! src/game/board.rs
//!
//! Square grid of cells plus the winning-line geometry.
//!
//! Cells are stored row-major. For a board of edge `n` the winning lines are
//! the `n` rows, the `n` columns and the two diagonals (8 lines on 3x3).

use std::fmt;

/// A player's mark. X always opens the first round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Ordered `(row, col)` positions forming one winning run.
pub type Line = Vec<(usize, usize)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
    lines: Vec<Line>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            lines: Self::build_lines(size),
        }
    }

    fn build_lines(size: usize) -> Vec<Line> {
        let rows = (0..size).map(|r| (0..size).map(|c| (r, c)).collect::<Line>());
        let cols = (0..size).map(|c| (0..size).map(|r| (r, c)).collect::<Line>());
        let diag: Line = (0..size).map(|i| (i, i)).collect();
        let anti: Line = (0..size).map(|i| (i, size - 1 - i)).collect();
        rows.chain(cols).chain([diag, anti]).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Mark at `(row, col)`; `None` for empty or off-board cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Write a mark without any rule checks. Callers validate first.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        let size = self.size;
        self.cells[row * size + col] = Some(mark);
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All winning lines for this board size.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Row-major snapshot of every cell.
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// First line holding `size` identical marks, with the owning mark.
    pub fn winning_line(&self) -> Option<(Mark, &Line)> {
        self.lines.iter().find_map(|line| {
            let &(r0, c0) = line.first()?;
            let first = self.get(r0, c0)?;
            line.iter()
                .all(|&(r, c)| self.get(r, c) == Some(first))
                .then_some((first, line))
        })
    }
}

impl fmt::Display for Board {
    /// Plain grid rendering, `.` for empty cells. Logged when a round ends.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.size {
                match self.get(r, c) {
                    Some(m) => write!(f, "{m}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut b = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => b.set(r, c, Mark::X),
                    'O' => b.set(r, c, Mark::O),
                    _ => {}
                }
            }
        }
        b
    }

    #[test]
    fn classic_board_has_eight_lines() {
        let b = Board::new(3);
        assert_eq!(b.lines().len(), 8);
        assert!(b.lines().iter().all(|l| l.len() == 3));
        assert!(b.lines().contains(&vec![(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn larger_board_line_count() {
        assert_eq!(Board::new(5).lines().len(), 12);
    }

    #[test]
    fn detects_row_column_and_diagonals() {
        let row = board_from(&["...", "OOO", "X.X"]);
        assert_eq!(
            row.winning_line(),
            Some((Mark::O, &vec![(1, 0), (1, 1), (1, 2)]))
        );

        let col = board_from(&["X.O", "X.O", "X.."]);
        assert_eq!(col.winning_line().map(|(m, _)| m), Some(Mark::X));

        let diag = board_from(&["X.O", ".XO", "..X"]);
        assert_eq!(
            diag.winning_line().map(|(_, l)| l.clone()),
            Some(vec![(0, 0), (1, 1), (2, 2)])
        );

        let anti = board_from(&["X.O", ".OX", "O.."]);
        assert_eq!(anti.winning_line().map(|(m, _)| m), Some(Mark::O));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let b = board_from(&["XOX", "XOO", "OXX"]);
        assert!(b.is_full());
        assert_eq!(b.winning_line(), None);
    }

    #[test]
    fn get_off_board_is_none() {
        let b = board_from(&["XXX", "...", "..."]);
        assert_eq!(b.get(3, 0), None);
        assert_eq!(b.get(0, 3), None);
        assert!(!b.contains(0, 3));
    }

    #[test]
    fn empty_board_has_no_winner() {
        let b = Board::new(0);
        assert_eq!(b.winning_line(), None);
        assert!(b.is_full());
    }

    #[test]
    fn display_shows_final_position() {
        let b = board_from(&["XXX", "OO.", "..."]);
        assert_eq!(b.to_string(), "XXX\nOO.\n...");
    }

    #[test]
    fn clear_empties_everything() {
        let mut b = board_from(&["XO.", ".X.", "..O"]);
        assert_eq!(b.filled(), 4);
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "...\n...\n...");
    }
}
