//! Command-line interface for hotseat_tictactoe.

use clap::Parser;
use hotseat_tictactoe::{ConfigError, SeriesConfig};
use std::path::PathBuf;
use tracing::instrument;

/// Hot-seat tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat_tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running series score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML file with presentation settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Never clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Write trace logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the series settings: file values first, flags on top.
    #[instrument(skip(self))]
    pub fn series_config(&self) -> Result<SeriesConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SeriesConfig::from_file(path)?,
            None => SeriesConfig::default(),
        };
        if self.plain {
            config = config.with_color(false);
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::try_parse_from(["hotseat_tictactoe"]).unwrap();
        assert_eq!(cli.series_config().unwrap(), SeriesConfig::default());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["hotseat_tictactoe", "--plain", "--no-clear"]).unwrap();
        let config = cli.series_config().unwrap();
        assert!(!config.color());
        assert!(!config.clear_screen());
        assert_eq!(*config.conflict_pause_ms(), 1500);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "hotseat_tictactoe",
            "--config",
            "/definitely/not/here.toml",
        ])
        .unwrap();
        assert!(cli.series_config().is_err());
    }
}
