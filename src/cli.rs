//! Command-line interface for tichect.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tichect_rules::EdgePolicy;

/// Tic-Hect-4 - tic-tac-toe with rotation, attacks and takeovers
#[derive(Parser, Debug)]
#[command(name = "tichect")]
#[command(about = "Play Tic-Hect-4 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Table configuration file (optional)
    #[arg(long, global = true, default_value = "tichect.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Print one JSON view per line instead of the text board
        #[arg(long)]
        json: bool,

        /// Override the configured edge policy
        #[arg(long)]
        edge_policy: Option<EdgePolicy>,
    },

    /// Apply a JSON array of actions and print the final state
    Replay {
        /// File holding the actions
        file: PathBuf,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board string such as "XXO/X.O/..."
    Winner {
        /// Nine cells of X, O or '.', optionally split by '/' or '|'
        board: String,
    },
}
