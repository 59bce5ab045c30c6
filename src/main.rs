//! Tic-Hect-4 - terminal CLI
//!
//! Play a game, replay a recorded one, or judge a board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::Path;
use tichect::{GameConfig, GameView, Session, terminal::render};
use tichect_rules::{Action, Board, GameState, rules::winning_region};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tichect=debug")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { json, edge_policy } => {
            let config = match edge_policy {
                Some(policy) => config.with_edge_policy(policy),
                None => config,
            };
            run_play(config, json)
        }
        Command::Replay { file, json } => run_replay(config, &file, json),
        Command::Winner { board } => run_winner(&board),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig, json: bool) -> Result<()> {
    info!(edge_policy = %config.edge_policy(), "Starting game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let game = Session::new(config, stdin.lock(), stdout.lock())
        .with_json(json)
        .run()?;
    info!(status = %game.status(), "Goodbye");
    Ok(())
}

/// Replay a JSON action list and print the final table
#[instrument(skip(config, file), fields(file = %file.display()))]
fn run_replay(config: GameConfig, file: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read replay file {}", file.display()))?;
    let actions: Vec<Action> =
        serde_json::from_str(&content).context("Replay file is not a JSON list of actions")?;

    info!(actions = actions.len(), "Replaying");
    let game = GameState::replay_with(*config.edge_policy(), &actions);
    let view = GameView::new(&game, &config);

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        writeln!(out, "{}", render(&view, *config.render_rotated()))?;
        writeln!(out, "Status: {}", game.status())?;
    }
    Ok(())
}

/// Print the winner of a board, if any
#[instrument]
fn run_winner(board: &str) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", board.display())?;
    match winning_region(&board) {
        Some(region) => {
            let cells: Vec<String> = region.cells.iter().map(|p| p.label().to_string()).collect();
            writeln!(out, "Winner: {} ({})", region.owner, cells.join(", "))?;
        }
        None if board.is_full() => writeln!(out, "It's a draw!")?,
        None => writeln!(out, "No winner")?,
    }
    Ok(())
}
