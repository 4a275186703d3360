//! src/panels/scores.rs
//!
//! Session scoreboard plus the player to move.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::SharedGame;

pub struct ScoresPanel {
    pub shared: SharedGame,
}

impl ScoresPanel {
    pub fn new(shared: SharedGame) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for ScoresPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.borrow();

        let mut lines = vec![Line::from(Span::styled(
            g.scores_text(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))];

        if !g.is_over() {
            let style = g.config().style(g.current_player());
            lines.push(Line::from(vec![
                Span::raw("to move: "),
                Span::styled(
                    style.label.clone(),
                    Style::default().fg(style.color).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        let block = Block::default().title("Score").borders(Borders::ALL);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
