//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

use clap::Parser;

use tictactoe_tui::{app, cli::Args};

fn main() -> color_eyre::Result<()> {
    app::run(Args::parse())
}
