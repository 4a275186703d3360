//! src/panels/status.rs
//!
//! Status label: whose turn it is, or how the round ended.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::SharedGame;

pub struct StatusPanel {
    pub shared: SharedGame,
}

impl StatusPanel {
    pub fn new(shared: SharedGame) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for StatusPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let (text, color) = self.shared.borrow().status();
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig, shared};
    use crate::ui::Panel;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    #[test]
    fn win_is_shown_in_the_winners_colour() {
        let game = shared(Game::new(GameConfig::default()));
        // O takes the middle column
        for (r, c) in [(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)] {
            game.borrow_mut().place(r, c).unwrap();
        }
        let panel = StatusPanel::new(game);

        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal.draw(|f| panel.draw(f, f.area())).unwrap();
        let buf = terminal.backend().buffer();

        let row: String = (0..30).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains("O wins!"), "{row:?}");
        let first = (0..30)
            .map(|x| &buf[(x, 1)])
            .find(|c| c.symbol() == "O")
            .unwrap();
        assert_eq!(first.fg, Color::Green);
    }
}
