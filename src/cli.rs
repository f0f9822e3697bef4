//! Command-line interface for tictac_duel.

use clap::Parser;

/// Two-player console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac_duel")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for choosing who starts each round (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    pub no_clear: bool,
}
