//! src/lib.rs
//!
//! Library side of the game: rules, layout tree, panels and event loop.
//! `main.rs` only parses arguments and hands over to `app::run()`.

pub mod app;
pub mod cli;
pub mod game;
pub mod logging;
pub mod panels;
pub mod ui;
