//! Replay a farmer's decoded event log into silo and field balances.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use beanstalk_ledger::{chain_order, EventProcessor};

mod config;
mod log_file;
mod report;

#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Fold a farmer's decoded Beanstalk events into balances")]
#[command(version)]
struct Cli {
    /// TOML config with account, season and token whitelist
    #[arg(short, long, env = "REPLAY_CONFIG")]
    config: PathBuf,

    /// Event log (JSON array or JSON lines)
    #[arg(short, long)]
    events: PathBuf,

    /// Override the configured season
    #[arg(long, env = "BEANSTALK_SEASON")]
    season: Option<u32>,

    /// Log and skip rejected events instead of stopping at the first one
    #[arg(long)]
    skip_errors: bool,

    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("beanstalk=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config)?;
    if let Some(season) = cli.season {
        config.season = season;
    }
    config.log_summary();

    let mut events = log_file::load_events(&cli.events)?;
    info!(count = events.len(), "Loaded event log");

    let mut processor = EventProcessor::new(config.account, config.params());

    if cli.skip_errors {
        chain_order(&mut events);
        let mut skipped = 0usize;
        for event in &events {
            if let Err(e) = processor.ingest(&event.log) {
                warn!(
                    block = event.block_number,
                    log_index = event.log_index,
                    error = %e,
                    "Skipping rejected event"
                );
                skipped += 1;
            }
        }
        info!(applied = events.len() - skipped, skipped, "Replay complete");
    } else {
        processor.ingest_all(events)?;
    }

    let snapshot = report::snapshot(&processor, config.bean_decimals);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{snapshot}");
    }

    Ok(())
}
