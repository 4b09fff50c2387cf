//! Paralist - Entry Point

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use paralist::model::AppError;
use paralist::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Paralist - type a line, press Enter, keep the last few
#[derive(Parser, Debug)]
#[command(name = "paralist")]
#[command(version)]
#[command(about = "Terminal text field that keeps the most recent submissions as paragraphs")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of entries to keep (oldest is dropped first)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub capacity: Option<usize>,

    /// Maximum entry length in characters, after trimming
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_length: Option<usize>,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = paralist::config::load_config_with_precedence(args.config.clone())?;
        let merged = paralist::config::merge_config(config_file);
        let with_env = paralist::config::apply_env_overrides(merged);

        paralist::config::apply_cli_overrides(
            with_env,
            args.capacity,
            args.max_length,
            args.log_file.clone(),
        )
        .validate()?
    };

    paralist::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let colors = ColorConfig::from_env_and_args(args.no_color);
    paralist::view::run_with_config(&config, colors)?;

    Ok(())
}
