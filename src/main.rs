//! Viewslice demo - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use viewslice::view::DemoMode;

/// Viewslice demo - windowed rendering of a large synthetic sequence
#[derive(Parser, Debug)]
#[command(name = "viewslice")]
#[command(version)]
#[command(about = "TUI browser demonstrating the viewslice windowing engines")]
pub struct Args {
    /// Start in grid mode instead of list mode
    #[arg(short, long)]
    pub grid: bool,

    /// Overscan window, in items
    #[arg(long)]
    pub overscan: Option<usize>,

    /// Grid gap, in cells
    #[arg(long)]
    pub gap: Option<f64>,

    /// Synthetic items generated per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = viewslice::config::load_config_with_precedence(args.config.clone())?;
        let merged = viewslice::config::merge_config(config_file);
        let with_env = viewslice::config::apply_env_overrides(merged);
        viewslice::config::apply_cli_overrides(
            with_env,
            args.overscan,
            args.gap,
            args.page_size.map(|n| n as usize),
        )
    };

    // Logs go to a file; the terminal belongs to the TUI.
    viewslice::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mode = if args.grid {
        DemoMode::Grid
    } else {
        DemoMode::List
    };

    let mut app = viewslice::view::DemoApp::new(&config, mode)?;
    app.run()?;

    Ok(())
}
