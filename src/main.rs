//! Noughts - terminal tic-tac-toe with persisted statistics.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, GameSession, pick_first, run_game, write_stats};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays readable during play
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    match cli.command {
        Command::Play { first } => run_play(&config, first),
        Command::Stats => run_stats(&config),
        Command::History { limit } => run_history(&config, limit),
        Command::Reset => run_reset(&config),
    }
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: &AppConfig, first: Option<noughts::Mark>) -> Result<()> {
    let first = pick_first(first);
    let mut session = GameSession::new(*config.board_size(), first, config.record_store())?;
    let stdin = std::io::stdin();
    let end = run_game(&mut session, stdin.lock(), std::io::stdout())?;
    info!(?end, "Game ended");
    Ok(())
}

/// Prints aggregate statistics.
#[instrument(skip(config))]
fn run_stats(config: &AppConfig) -> Result<()> {
    let stats = config.record_store().load_stats();
    write_stats(&mut std::io::stdout(), &stats)?;
    Ok(())
}

/// Prints recent history records.
#[instrument(skip(config))]
fn run_history(config: &AppConfig, limit: Option<i64>) -> Result<()> {
    let limit = limit.unwrap_or(*config.history_limit());
    let records = config.record_store().load_history(limit);
    if records.is_empty() {
        println!("No games recorded yet.");
    }
    for record in records {
        println!("{}", record);
    }
    Ok(())
}

/// Deletes the record files.
#[instrument(skip(config))]
fn run_reset(config: &AppConfig) -> Result<()> {
    config.record_store().reset()?;
    println!("Statistics and history cleared.");
    Ok(())
}
