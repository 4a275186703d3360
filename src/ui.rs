//! src/ui.rs
//!
//! Top-level UI module re-exporting the layout tree and actions.

pub mod action;
pub mod node;

pub use action::Action;
pub use node::{Node, Panel, group, leaf};
