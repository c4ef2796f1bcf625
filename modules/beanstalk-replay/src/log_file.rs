//! Reading decoded event logs from disk.
//!
//! Accepts either a JSON array of events or JSON lines (one event per line,
//! blank lines ignored).

use std::path::Path;

use anyhow::{Context, Result};
use beanstalk_events::ChainEvent;

pub fn load_events(path: &Path) -> Result<Vec<ChainEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event log: {}", path.display()))?;
    parse_events(&content).with_context(|| format!("Failed to parse event log: {}", path.display()))
}

pub fn parse_events(content: &str) -> Result<Vec<ChainEvent>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("Invalid JSON array of events");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid event on line {}", i + 1))
        })
        .collect()
}
