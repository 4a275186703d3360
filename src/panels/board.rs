//! src/panels/board.rs
//!
//! Board panel: the grid of clickable cells.
//!
//! Each cell is a bordered box showing its mark in the owner's colour. The
//! keyboard cursor gets a yellow border and the cells of a winning line a
//! light-red background.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::SharedGame;
use crate::ui::Action;

pub struct BoardPanel {
    pub shared: SharedGame,
    pub cursor: (usize, usize),
}

impl BoardPanel {
    pub fn new(shared: SharedGame, cursor: (usize, usize)) -> Self {
        Self { shared, cursor }
    }

    /// Row-major cell rectangles for a `size` x `size` grid inside `area`.
    ///
    /// The outer border of the panel is excluded.
    pub fn cell_areas(area: Rect, size: usize) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let ratios = vec![Constraint::Ratio(1, size as u32); size];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(ratios.clone())
            .split(inner);
        rows.iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(ratios.clone())
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }
}

impl crate::ui::Panel for BoardPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.borrow();
        let size = g.board().size();
        let winning = g.winning_line();

        f.render_widget(Block::default().title("Board").borders(Borders::ALL), area);

        for (idx, cell) in Self::cell_areas(area, size).into_iter().enumerate() {
            let (row, col) = (idx / size, idx % size);

            let mut block = Block::default().borders(Borders::ALL);
            if (row, col) == self.cursor {
                block = block.border_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            }
            if winning.is_some_and(|line| line.contains(&(row, col))) {
                block = block.style(Style::default().bg(Color::LightRed));
            }

            let (text, style) = match g.board().get(row, col) {
                Some(mark) => {
                    let player = g.config().style(mark);
                    (
                        player.label.clone(),
                        Style::default().fg(player.color).add_modifier(Modifier::BOLD),
                    )
                }
                None => (String::new(), Style::default()),
            };

            // vertically centre the single text line inside the borders
            let pad = cell.height.saturating_sub(3) / 2;
            let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
            lines.push(Line::styled(text, style));

            let p = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(p, cell);
        }
    }

    fn click(&self, area: Rect, column: u16, row: u16) -> Option<Action> {
        let size = self.shared.borrow().board().size();
        Self::cell_areas(area, size)
            .iter()
            .position(|cell| cell.contains(Position::new(column, row)))
            .map(|idx| Action::Place {
                row: idx / size,
                col: idx % size,
            })
    }
}
