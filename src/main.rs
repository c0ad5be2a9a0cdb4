//! Terminal memory puzzle (default binary).
//!
//! Click two covered tiles per turn; matching pairs stay face-up until the
//! board is cleared. Needs a terminal with mouse reporting and 24-bit color.
//! Quit with Escape, `q` or Ctrl-C.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_puzzle::core::GameConfig;
use memory_puzzle::engine::Game;
use memory_puzzle::term::TerminalPlatform;

#[derive(Debug, Parser)]
#[command(name = "memory-puzzle", version, about = "Tile-matching memory game for the terminal")]
struct Cli {
    /// Seed for board generation (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "MEMORY_PUZZLE_LOG")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    config.validate().context("invalid board configuration")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "starting memory puzzle");

    let mut platform = TerminalPlatform::new(
        config.window_width,
        config.window_height,
        config.theme.background,
    );
    platform.enter()?;

    let result = run(config, &mut platform, seed);

    // Always try to restore terminal state.
    let _ = platform.exit();
    result
}

fn run(config: GameConfig, platform: &mut TerminalPlatform, seed: u32) -> Result<()> {
    let mut game = Game::new(config, platform, seed)?;
    game.run()
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    // The terminal is the game surface; logs only ever go to the file.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
