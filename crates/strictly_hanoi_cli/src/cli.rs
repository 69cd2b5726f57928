//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hanoi - Tower of Hanoi in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Tower of Hanoi with strict move checking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "hanoi.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// Number of blocks (3-10), overrides the config file
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=10))]
        blocks: Option<u8>,
    },

    /// Print the optimal solution
    Solve {
        /// Number of blocks (3-10), overrides the config file
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=10))]
        blocks: Option<u8>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_blocks() {
        let cli = Cli::try_parse_from(["strictly_hanoi", "play", "--blocks", "5"]).unwrap();
        assert!(matches!(cli.command, Command::Play { blocks: Some(5) }));
        assert_eq!(cli.config, PathBuf::from("hanoi.toml"));
    }

    #[test]
    fn test_parse_solve_json_with_config() {
        let cli = Cli::try_parse_from([
            "strictly_hanoi",
            "solve",
            "--json",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Solve {
                blocks: None,
                json: true
            }
        ));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_block_range_enforced() {
        assert!(Cli::try_parse_from(["strictly_hanoi", "play", "-b", "11"]).is_err());
        assert!(Cli::try_parse_from(["strictly_hanoi", "solve", "-b", "2"]).is_err());
    }
}
