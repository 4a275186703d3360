//! src/panels/menu.rs
//!
//! Clickable "New Game" and "Exit" buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Action;

const BUTTONS: [(&str, Action); 2] = [("New Game", Action::Restart), ("Exit", Action::Quit)];

pub struct MenuPanel;

impl MenuPanel {
    /// Areas of the buttons, in `BUTTONS` order.
    fn button_areas(area: Rect) -> std::rc::Rc<[Rect]> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner)
    }
}

impl crate::ui::Panel for MenuPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(Block::default().title("Menu").borders(Borders::ALL), area);
        for ((label, _), slot) in BUTTONS.iter().zip(Self::button_areas(area).iter()) {
            let button = Paragraph::new(format!("[ {label} ]"))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(button, *slot);
        }
    }

    fn click(&self, area: Rect, column: u16, row: u16) -> Option<Action> {
        BUTTONS
            .iter()
            .zip(Self::button_areas(area).iter())
            .find(|(_, slot)| slot.contains(Position::new(column, row)))
            .map(|((_, action), _)| *action)
    }
}
