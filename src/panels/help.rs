//! src/panels/help.rs
//!
//! Key bindings reference.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BINDINGS: &[(&str, &str)] = &[
    ("arrows/hjkl", "move cursor"),
    ("enter/space", "place mark"),
    ("1-9", "place on 3x3 (row-major)"),
    ("click", "place / press button"),
    ("n/r", "new game"),
    ("q/esc", "quit"),
];

pub struct HelpPanel;

impl crate::ui::Panel for HelpPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let key = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(k, what)| Line::from(vec![Span::styled(format!("{k:<12}"), key), Span::raw(*what)]))
            .collect();
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
