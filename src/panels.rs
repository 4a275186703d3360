//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod board;
pub mod help;
pub mod menu;
pub mod moves;
pub mod scores;
pub mod status;
pub mod title;

pub use board::BoardPanel;
pub use help::HelpPanel;
pub use menu::MenuPanel;
pub use moves::MovesPanel;
pub use scores::ScoresPanel;
pub use status::StatusPanel;
pub use title::TitlePanel;
