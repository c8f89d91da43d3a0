//! Signal Front - Entry Point
//!
//! Autoplays a game from command-line flags and an optional TOML config,
//! prints the turn log and optionally writes the full record as JSON.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use signal_front::core::error::Result;
use signal_front::core::GameConfig;
use signal_front::front::{run_session, DEFAULT_SEED, DEFAULT_TURNS};

/// Signal Front - autoplayed territorial conflict
#[derive(Parser, Debug)]
#[command(name = "signal-front")]
#[command(about = "Run an autoplayed Signal Front game and print the turn log")]
struct Args {
    /// TOML file with game settings (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length
    #[arg(long)]
    size: Option<u32>,

    /// Enemy starting troops
    #[arg(long)]
    enemy_total: Option<u32>,

    /// Player starting troops
    #[arg(long)]
    player_total: Option<u32>,

    /// Player troops per turn
    #[arg(long)]
    reinforcements: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum turns to play
    #[arg(long, default_value_t = DEFAULT_TURNS)]
    turns: u32,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Write the full session record as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "signal_front=debug"
    } else {
        "signal_front=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&args)?;
    let record = run_session(config, args.turns)?;

    match args.format.as_str() {
        "json" => println!("{}", record.to_json()?),
        other => {
            if other != "text" {
                tracing::warn!("Unknown format '{}', using text", other);
            }
            println!("{}", record.report());
            println!();
            println!("{}", record.summary());
        }
    }

    if let Some(path) = &args.output {
        std::fs::write(path, record.to_json()?)?;
        tracing::info!("Session record written to {}", path.display());
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(total) = args.enemy_total {
        config.enemy_total = total;
    }
    if let Some(total) = args.player_total {
        config.player_total = total;
    }
    if let Some(reinforcements) = args.reinforcements {
        config.player_reinforcements = reinforcements;
    }
    config.seed = args.seed.or(config.seed).or(Some(DEFAULT_SEED));

    config.validate()?;
    Ok(config)
}
