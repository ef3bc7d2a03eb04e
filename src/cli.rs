//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_board::Mark;
use std::path::PathBuf;

/// Noughts - tic-tac-toe with persisted statistics and history
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with persisted statistics and history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Override the directory holding the stats and history files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Mark that moves first (X or O); random if omitted
        #[arg(long)]
        first: Option<Mark>,
    },

    /// Show aggregate statistics
    Stats,

    /// Show recent games, oldest first
    History {
        /// Number of records to show; 0 or less shows all
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<i64>,
    },

    /// Delete saved statistics and history
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_first() {
        let cli = Cli::try_parse_from(["noughts", "play", "--first", "o"]).unwrap();
        assert!(matches!(cli.command, Command::Play { first: Some(Mark::O) }));
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_parse_history_negative_limit() {
        let cli = Cli::try_parse_from(["noughts", "history", "--limit", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::History { limit: Some(-1) }));
    }

    #[test]
    fn test_parse_global_data_dir() {
        let cli = Cli::try_parse_from(["noughts", "stats", "--data-dir", "/tmp/n"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/n")));
    }

    #[test]
    fn test_reject_bad_mark() {
        assert!(Cli::try_parse_from(["noughts", "play", "--first", "Z"]).is_err());
    }
}
