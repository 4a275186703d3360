//! src/game/state.rs
//!
//! Authoritative game state: board, turn, round outcome, moves and scores.
//!
//! The state is shared between the event loop and the panels through
//! `SharedGame`; everything runs on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::style::Color;

use super::board::{Board, Line, Mark};
use super::config::GameConfig;
use super::error::MoveError;

/// One mark placed during the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

/// Where the current round stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won { mark: Mark, line: Line },
    Tied,
}

/// Cumulative wins per player for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current: Mark,
    outcome: Outcome,
    moves: Vec<Move>,
    scores: Scores,
}

impl Game {
    /// Start a session with an empty board and X to move.
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size()),
            config,
            current: Mark::X,
            outcome: Outcome::Playing,
            moves: Vec::new(),
            scores: Scores::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next `place` puts down.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Moves of the current round, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Playing
    }

    /// Winning cells of the finished round, if it was won.
    pub fn winning_line(&self) -> Option<&Line> {
        match &self.outcome {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check whether the current player may mark `(row, col)`.
    pub fn validate(&self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::RoundOver);
        }
        if !self.board.contains(row, col) {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }
        if self.board.get(row, col).is_some() {
            return Err(MoveError::Occupied { row, col });
        }
        Ok(())
    }

    /// Place the current player's mark at `(row, col)` and settle the round.
    ///
    /// On a win the winner's score goes up and the winning line is kept for
    /// highlighting. On a win or a tie the turn does not pass, so the player
    /// who finished the round opens the next one. Refused moves leave every
    /// field untouched.
    pub fn place(&mut self, row: usize, col: usize) -> Result<&Outcome, MoveError> {
        self.validate(row, col)?;

        let mark = self.current;
        self.board.set(row, col, mark);
        self.moves.push(Move { row, col, mark });

        if let Some((winner, line)) = self.board.winning_line() {
            let line = line.clone();
            self.scores.record_win(winner);
            self.outcome = Outcome::Won { mark: winner, line };
        } else if self.board.is_full() {
            self.outcome = Outcome::Tied;
        } else {
            self.current = mark.opposite();
        }
        Ok(&self.outcome)
    }

    /// Clear the board for a new round. Scores and the turn carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.moves.clear();
        self.outcome = Outcome::Playing;
    }

    /// Status label text and colour (`Color::Reset` means the default).
    pub fn status(&self) -> (String, Color) {
        match &self.outcome {
            Outcome::Won { mark, .. } => (
                format!("{} wins!", self.config.style(*mark).label),
                self.config.style(*mark).color,
            ),
            Outcome::Tied => ("It's a tie!".to_string(), Color::Gray),
            Outcome::Playing if self.moves.is_empty() => ("Let's Play!".to_string(), Color::Reset),
            Outcome::Playing => (
                format!("{}'s turn", self.config.style(self.current).label),
                Color::Reset,
            ),
        }
    }

    /// Score label, e.g. `X: 2   O: 1`.
    pub fn scores_text(&self) -> String {
        [Mark::X, Mark::O]
            .iter()
            .map(|&m| format!("{}: {}", self.config.style(m).label, self.scores.get(m)))
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// Alias: Rc<RefCell<Game>>
pub type SharedGame = Rc<RefCell<Game>>;

/// Wrap a game for sharing between the loop and the panels.
pub fn shared(game: Game) -> SharedGame {
    Rc::new(RefCell::new(game))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            game.place(r, c).unwrap();
        }
    }

    #[test]
    fn turns_alternate_from_x() {
        let mut g = Game::new(GameConfig::default());
        assert_eq!(g.current_player(), Mark::X);
        g.place(0, 0).unwrap();
        assert_eq!(g.current_player(), Mark::O);
        g.place(1, 1).unwrap();
        assert_eq!(g.current_player(), Mark::X);
        assert_eq!(g.board().get(1, 1), Some(Mark::O));
    }

    #[test]
    fn row_win_ends_round_and_scores() {
        let mut g = Game::new(GameConfig::default());
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let outcome = g.place(0, 2).unwrap().clone();
        assert_eq!(
            outcome,
            Outcome::Won {
                mark: Mark::X,
                line: vec![(0, 0), (0, 1), (0, 2)]
            }
        );
        assert_eq!(g.scores().get(Mark::X), 1);
        assert_eq!(g.scores().get(Mark::O), 0);
        assert_eq!(g.status(), ("X wins!".to_string(), Color::Blue));
        assert_eq!(g.current_player(), Mark::X);
    }

    #[test]
    fn full_board_without_line_is_tie() {
        let mut g = Game::new(GameConfig::default());
        // X O X / X O O / O X X
        play(
            &mut g,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert_eq!(g.outcome(), &Outcome::Tied);
        assert_eq!(g.scores(), Scores::default());
        assert_eq!(g.status(), ("It's a tie!".to_string(), Color::Gray));
        assert_eq!(g.current_player(), Mark::X);
    }

    #[test]
    fn win_on_last_cell_beats_tie() {
        let mut g = Game::new(GameConfig::default());
        // X O X / O X O / O X X  (last X completes the main diagonal)
        play(
            &mut g,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 0),
            ],
        );
        assert_eq!(g.outcome(), &Outcome::Playing);
        g.place(2, 2).unwrap();
        assert!(matches!(g.outcome(), Outcome::Won { mark: Mark::X, .. }));
    }

    #[test]
    fn occupied_cell_is_refused_without_change() {
        let mut g = Game::new(GameConfig::default());
        g.place(1, 1).unwrap();
        let before = g.clone();
        assert_eq!(g.place(1, 1), Err(MoveError::Occupied { row: 1, col: 1 }));
        assert_eq!(g.board(), before.board());
        assert_eq!(g.current_player(), before.current_player());
        assert_eq!(g.moves(), before.moves());
    }

    #[test]
    fn off_board_and_finished_round_are_refused() {
        let mut g = Game::new(GameConfig::default());
        assert_eq!(
            g.place(3, 0),
            Err(MoveError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(g.place(2, 2), Err(MoveError::RoundOver));
        assert_eq!(g.board().get(2, 2), None);
    }

    #[test]
    fn restart_clears_board_but_keeps_scores_and_turn() {
        let mut g = Game::new(GameConfig::default());
        // O wins in column 2
        play(&mut g, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(g.scores().get(Mark::O), 1);

        g.restart();
        assert!(g.board().is_empty());
        assert!(g.moves().is_empty());
        assert!(!g.is_over());
        assert_eq!(g.scores().get(Mark::O), 1);
        assert_eq!(g.current_player(), Mark::O);
        assert_eq!(g.status(), ("Let's Play!".to_string(), Color::Reset));
    }

    #[test]
    fn status_and_scores_text() {
        let mut g = Game::new(GameConfig::default());
        assert_eq!(g.scores_text(), "X: 0   O: 0");
        g.place(0, 0).unwrap();
        assert_eq!(g.status().0, "O's turn");
    }

    #[test]
    fn four_by_four_needs_full_row() {
        let mut g = Game::new(GameConfig::new(4).unwrap());
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
        assert!(!g.is_over());
        g.place(0, 3).unwrap();
        assert_eq!(g.winning_line().map(Vec::len), Some(4));
    }
}
