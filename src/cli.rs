//! src/cli.rs
//!
//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::game::GameConfig;
use crate::game::error::ConfigError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player Tic Tac Toe in the terminal", long_about = None)]
pub struct Args {
    /// Cells per board edge (3..=9); a full row, column or diagonal wins
    #[arg(long, default_value_t = 3)]
    pub size: usize,

    /// Append diagnostic log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Also log every move and ignored input
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_classic_board() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(args.size, 3);
        assert!(args.log_file.is_none());
        assert!(!args.verbose);
        assert_eq!(args.game_config().unwrap().board_size(), 3);
    }

    #[test]
    fn parses_flags() {
        let args =
            Args::try_parse_from(["tictactoe", "--size", "4", "--log-file", "t.log", "--verbose"])
                .unwrap();
        assert_eq!(args.size, 4);
        assert_eq!(args.log_file, Some(PathBuf::from("t.log")));
        assert!(args.verbose);
    }

    #[test]
    fn bad_size_is_a_config_error() {
        let args = Args::try_parse_from(["tictactoe", "--size", "12"]).unwrap();
        assert!(args.game_config().is_err());
    }
}
