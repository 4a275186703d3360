//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! Drawing and mouse hit-testing split the same tree the same way, so a click
//! always lands on the panel that was drawn under it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use super::action::Action;

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);

    /// Map a click at terminal cell `(column, row)` inside `area` to an action.
    fn click(&self, _area: Rect, _column: u16, _row: u16) -> Option<Action> {
        None
    }
}

/// Node tree used to compose the UI each frame.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf {
        panel: Box<dyn Panel>,
    },
}

impl Node {
    fn split(direction: Direction, constraints: &[Constraint], area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(direction)
            .constraints(constraints.to_vec())
            .split(area)
    }

    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Self::split(*direction, constraints, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }

    /// Route a click to the leaf whose area contains it.
    pub fn click(&self, area: Rect, column: u16, row: u16) -> Option<Action> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Self::split(*direction, constraints, area);
                children
                    .iter()
                    .zip(chunks.iter())
                    .find(|(_, chunk)| chunk.contains(Position::new(column, row)))
                    .and_then(|(child, chunk)| child.click(*chunk, column, row))
            }
            Node::Leaf { panel } => panel.click(area, column, row),
        }
    }
}

/// Helper: create a group node.
pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf(panel: Box<dyn Panel>) -> Node {
    Node::Leaf { panel }
}
