//! Hot-seat tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use hotseat_tictactoe::{
    Console, ConsoleError, Series, SeriesConfig, SeriesReport, TerminalConsole, TerminalGuard,
    Tone,
};
use std::path::Path;
use tracing::{info, instrument, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        initialize_tracing(path)?;
    }

    let config = cli.series_config()?;
    info!(?config, "Starting hot-seat tic-tac-toe");

    let guard = TerminalGuard::acquire();
    let game_config = config.clone();
    let mut game = tokio::task::spawn_blocking(move || run_series(game_config));

    tokio::select! {
        joined = &mut game => {
            drop(guard);
            match joined?? {
                Some(report) => info!(
                    ending = ?report.ending(),
                    rounds = report.rounds().len(),
                    "Exiting after series"
                ),
                None => info!("Exiting before setup completed"),
            }
            Ok(())
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            warn!("Interrupt received");
            let mut console = TerminalConsole::new(&config);
            let _ = console.line(Tone::Error, "\n\nGame interrupted. Thanks for playing!");
            drop(guard);
            // The game thread is parked on stdin and cannot be joined.
            std::process::exit(0);
        }
    }
}

/// Runs a full series on the real terminal.
#[instrument(skip(config))]
fn run_series(config: SeriesConfig) -> Result<Option<SeriesReport>, ConsoleError> {
    let mut console = TerminalConsole::new(&config);
    let Some(mut series) = Series::setup(&mut console, config)? else {
        return Ok(None);
    };
    let report = series.play()?;
    Ok(Some(report))
}

/// Sends logs to a file so they never interleave with the board.
#[instrument(skip(path))]
fn initialize_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(path = %path.display(), "Tracing initialized");
    Ok(())
}
