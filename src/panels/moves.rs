//! src/panels/moves.rs
//!
//! Moves panel: the current round's moves, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::SharedGame;

pub struct MovesPanel {
    pub shared: SharedGame,
}

impl MovesPanel {
    pub fn new(shared: SharedGame) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for MovesPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.borrow();
        let moves = g.moves();
        // borders take two rows
        let height = area.height.saturating_sub(2) as usize;
        let start = moves.len().saturating_sub(height);
        let last_index = moves.len().saturating_sub(1);

        let lines: Vec<Line> = moves
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, mv)| {
                let style = g.config().style(mv.mark);
                let pos = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(style.label.clone(), Style::default().fg(style.color)),
                    Span::raw(" -> "),
                    Span::styled(format!("row {}, col {}", mv.row + 1, mv.col + 1), pos),
                ])
            })
            .collect();

        let block = Block::default().title("Moves").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
