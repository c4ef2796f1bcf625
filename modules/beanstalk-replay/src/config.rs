use std::path::Path;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use beanstalk_events::{Season, Token};
use beanstalk_ledger::ProcessingParams;
use serde::Deserialize;
use tracing::info;

/// TOML-backed replay configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayConfig {
    /// Farmer whose events are being folded
    pub account: Address,
    /// Current season; withdrawals at or before it are claimable
    pub season: Season,
    /// Precision of bean-denominated values: bdv, plot indices and pods
    #[serde(default = "default_bean_decimals")]
    pub bean_decimals: u8,
    /// Silo whitelist
    pub tokens: Vec<Token>,
}

fn default_bean_decimals() -> u8 {
    6
}

impl ReplayConfig {
    pub fn params(&self) -> ProcessingParams {
        ProcessingParams::new(self.season, self.tokens.iter().cloned())
    }

    pub fn log_summary(&self) {
        let symbols: Vec<&str> = self.tokens.iter().map(|t| t.symbol.as_str()).collect();
        info!(
            account = %self.account,
            season = self.season,
            tokens = ?symbols,
            "Replay config loaded"
        );
    }
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<ReplayConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<ReplayConfig> {
    let config: ReplayConfig = toml::from_str(content)?;
    Ok(config)
}
