//! src/app.rs
//!
//! Two-player Tic Tac Toe in the terminal.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the shared game, composes the panel tree each frame and runs the
//! event loop that turns key presses and mouse clicks into game actions.
//!
//! ## Overview
//! The screen shows:
//! - a title bar,
//! - a status label (`Let's Play!`, `X's turn`, `O wins!`, `It's a tie!`),
//! - the board, with the keyboard cursor and the winning line highlighted,
//! - the scoreboard, the moves of the current round and the key bindings,
//! - a menu with clickable **New Game** and **Exit** buttons.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release -- [--size N] [--log-file PATH] [--verbose]
//! ```
//!
//! # Keyboard Controls
//!
//! - **Arrows / h j k l**: move the cursor (stops at the edges).
//! - **Enter / Space**: place the current player's mark under the cursor.
//! - **1-9**: place directly on a 3x3 board, numbered row by row.
//! - **n / r**: new game. Scores are kept.
//! - **q / Esc**: quit and restore the terminal.
//!
//! # Mouse
//!
//! A left click on a cell places a mark; a left click on a menu button
//! presses it. Clicks are resolved against the same layout tree that was
//! drawn.
//!
//! # Rules Recap
//!
//! - X opens the session; turns alternate after every accepted move.
//! - Clicks on a taken cell, or after the round has ended, are ignored.
//! - A full row, column or diagonal of one mark wins the round and scores a
//!   point; a full board without such a line is a tie.
//! - The player who made the last move of a round also opens the next one.

use std::io::stdout;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction, Rect};

use crate::cli::Args;
use crate::game::{Game, GameConfig, Outcome, SharedGame, shared};
use crate::panels::{
    BoardPanel, HelpPanel, MenuPanel, MovesPanel, ScoresPanel, StatusPanel, TitlePanel,
};
use crate::ui::{Action, Node, Panel, group, leaf};
use crate::{log_debug, log_info, log_warn};

/// Map a key press to an action. Digits only address cells on a 3x3 board.
pub fn action_for_key(key: KeyEvent, board_size: usize) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor { d_row: -1, d_col: 0 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor { d_row: 1, d_col: 0 }),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor { d_row: 0, d_col: -1 }),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor { d_row: 0, d_col: 1 }),
        KeyCode::Char(c @ '1'..='9') if board_size == 3 => {
            let idx = c as usize - '1' as usize;
            Some(Action::Place {
                row: idx / 3,
                col: idx % 3,
            })
        }
        _ => None,
    }
}

/// Resolve a left-button press through the layout tree.
pub fn action_for_mouse(root: &Node, area: Rect, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => root.click(area, mouse.column, mouse.row),
        _ => None,
    }
}

/// Session state owned by the event loop.
pub struct App {
    pub game: SharedGame,
    pub cursor: (usize, usize),
    pub running: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let centre = config.board_size() / 2;
        Self {
            game: shared(Game::new(config)),
            cursor: (centre, centre),
            running: true,
        }
    }

    /// Apply one action. Refused moves are logged and otherwise ignored.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Place { row, col } => {
                let mut g = self.game.borrow_mut();
                if g.board().contains(row, col) {
                    self.cursor = (row, col);
                }
                let mover = g.current_player();
                match g.place(row, col).cloned() {
                    Ok(Outcome::Playing) => log_debug!("{mover} -> ({row}, {col})"),
                    Ok(Outcome::Won { mark, .. }) => {
                        log_info!("{mark} wins; {}", g.scores_text());
                        log_debug!("final board:\n{}", g.board());
                    }
                    Ok(Outcome::Tied) => {
                        log_info!("tie; {}", g.scores_text());
                        log_debug!("final board:\n{}", g.board());
                    }
                    Err(e) => log_debug!("ignored click: {e}"),
                }
            }
            Action::PlaceAtCursor => {
                let (row, col) = self.cursor;
                self.apply(Action::Place { row, col });
            }
            Action::MoveCursor { d_row, d_col } => {
                let max = (self.game.borrow().board().size() as i32 - 1).max(0);
                let (row, col) = self.cursor;
                self.cursor = (
                    (row as i32 + d_row).clamp(0, max) as usize,
                    (col as i32 + d_col).clamp(0, max) as usize,
                );
            }
            Action::Restart => {
                self.game.borrow_mut().restart();
                log_info!("new round; {}", self.game.borrow().scores_text());
            }
            Action::Quit => self.running = false,
        }
    }

    /// Compose the screen for the current frame.
    pub fn layout(&self) -> Node {
        let size = self.game.borrow().board().size();

        let side = group(
            Direction::Vertical,
            vec![
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(8),
            ],
            vec![
                leaf(Box::new(ScoresPanel::new(self.game.clone())) as Box<dyn Panel>),
                leaf(Box::new(MovesPanel::new(self.game.clone())) as Box<dyn Panel>),
                leaf(Box::new(HelpPanel) as Box<dyn Panel>),
            ],
        );

        let main = group(
            Direction::Horizontal,
            vec![Constraint::Percentage(60), Constraint::Percentage(40)],
            vec![
                leaf(Box::new(BoardPanel::new(self.game.clone(), self.cursor)) as Box<dyn Panel>),
                side,
            ],
        );

        group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ],
            vec![
                leaf(Box::new(TitlePanel::new("Tic Tac Toe", size)) as Box<dyn Panel>),
                leaf(Box::new(StatusPanel::new(self.game.clone())) as Box<dyn Panel>),
                main,
                leaf(Box::new(MenuPanel) as Box<dyn Panel>),
            ],
        )
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let frame_time = Duration::from_millis(100);

        while self.running {
            let root = self.layout();
            let completed = terminal
                .draw(|f| root.draw(f, f.area()))
                .wrap_err("drawing frame")?;
            let area = completed.area;

            // Wait up to one frame for input, then drain whatever is queued.
            let mut timeout = frame_time;
            while event::poll(timeout)? {
                timeout = Duration::ZERO;
                if !self.handle_event(&root, area, event::read()?) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Apply one terminal event against the layout drawn in `area`.
    ///
    /// Returns `false` when the queue should stop draining: after a quit, or
    /// after a resize, since later clicks must be resolved against the
    /// redrawn layout.
    pub fn handle_event(&mut self, root: &Node, area: Rect, event: Event) -> bool {
        let action = match event {
            Event::Key(key) => action_for_key(key, self.game.borrow().board().size()),
            Event::Mouse(mouse) => action_for_mouse(root, area, mouse),
            Event::Resize(..) => return false,
            _ => None,
        };
        if let Some(action) = action {
            self.apply(action);
        }
        self.running
    }
}

/// Run `body` inside a terminal session. `leave` runs whether `enter` or
/// `body` fails; a failing `leave` is logged and the first error wins.
fn with_session<T>(
    enter: impl FnOnce() -> color_eyre::Result<T>,
    body: impl FnOnce(&mut T) -> color_eyre::Result<()>,
    leave: impl FnOnce() -> std::io::Result<()>,
) -> color_eyre::Result<()> {
    let result = enter().and_then(|mut session| body(&mut session));
    if let Err(e) = leave() {
        log_warn!("terminal restore failed: {e}");
        if result.is_ok() {
            return Err(e).wrap_err("restoring terminal");
        }
    }
    result
}

fn enter_terminal() -> color_eyre::Result<DefaultTerminal> {
    let terminal = ratatui::try_init().wrap_err("entering raw mode")?;
    execute!(stdout(), EnableMouseCapture).wrap_err("enabling mouse capture")?;
    Ok(terminal)
}

/// Undo `enter_terminal`: mouse capture, raw mode and the alternate screen.
/// Safe to call after a partial setup.
fn restore_terminal() -> std::io::Result<()> {
    let mouse = execute!(stdout(), DisableMouseCapture);
    ratatui::try_restore()?;
    mouse
}

/// Chain a hook after the current one (color-eyre's) that gives the
/// terminal back before the report is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Some(path) = &args.log_file {
        crate::logging::init_log_file(path)
            .wrap_err_with(|| format!("opening log file {}", path.display()))?;
    }
    crate::logging::set_verbose(args.verbose);

    let config = args.game_config()?;
    log_info!("starting {0}x{0} session", config.board_size());
    let mut app = App::new(config);

    install_panic_hook();
    let result = with_session(
        enter_terminal,
        |terminal| app.event_loop(terminal),
        restore_terminal,
    );

    log_info!("exiting; {}", app.game.borrow().scores_text());
    result
}
