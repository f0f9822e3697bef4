//! tictac_duel - two players, one terminal, one board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tictac_duel::{Console, GameConfig, RandomStarter, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let rust_log = std::env::var("RUST_LOG").ok();

    // Subscriber first so config loading is traced; the filter is swapped
    // once the configured one is known. Diagnostics go to stderr so the
    // board stays readable.
    let initial = GameConfig::default().log_directive(rust_log.as_deref());
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new(initial));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(&cli)?;
    filter_handle.reload(EnvFilter::new(config.log_directive(rust_log.as_deref())))?;

    info!(?config, "Starting tictac_duel");
    run(&config)
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(config.with_overrides(cli.seed, cli.no_clear))
}

#[instrument(skip(config))]
fn run(config: &GameConfig) -> Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout().lock())
        .with_clear_screen(*config.clear_screen());

    let report = match config.seed() {
        Some(seed) => Session::new(console, RandomStarter::from_seed(*seed)).run()?,
        None => Session::new(console, RandomStarter::from_entropy()).run()?,
    };

    info!(rounds = report.rounds().len(), "Goodbye");
    Ok(())
}
