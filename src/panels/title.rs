//! src/panels/title.rs
//!
//! Header line with the game name and board size.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel {
    pub title: String,
}

impl TitlePanel {
    pub fn new(title: &str, board_size: usize) -> Self {
        Self {
            title: format!("{title}  ({board_size}x{board_size})"),
        }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.title.clone())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
