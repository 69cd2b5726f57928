//! Strictly Hanoi - terminal front end
//!
//! `play` runs an interactive session on stdin/stdout; `solve` prints the
//! optimal solution. Logs go to stderr.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;
mod solve;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::HanoiConfig;
use std::sync::Arc;
use strictly_hanoi::{Game, SystemClock};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HanoiConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { blocks } => run_play(config, blocks),
        Command::Solve { blocks, json } => run_solve(config, blocks, json),
    }
}

/// Run an interactive session
#[instrument(skip(config))]
fn run_play(config: HanoiConfig, blocks: Option<u8>) -> Result<()> {
    let mut game = build_game(config, blocks)?;
    info!(block_count = game.block_count(), "Starting interactive session");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session::run_session(&mut game, stdin.lock(), &mut stdout)
}

/// Print the optimal solution
#[instrument(skip(config))]
fn run_solve(config: HanoiConfig, blocks: Option<u8>, json: bool) -> Result<()> {
    let mut game = build_game(config, blocks)?;
    let mut stdout = std::io::stdout();
    solve::run_solve(&mut game, json, &mut stdout)
}

#[instrument(skip(config))]
fn build_game(config: HanoiConfig, blocks: Option<u8>) -> Result<Game> {
    let config = match blocks {
        Some(count) => config.with_block_count(count)?,
        None => config,
    };
    let game = Game::with_options(
        *config.block_count(),
        config.peg_labels().clone(),
        Arc::new(SystemClock::new()),
    )?;
    Ok(game)
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
