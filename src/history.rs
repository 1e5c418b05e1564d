use anyhow::{Context, Result};
use core_types::BacktestRecord;
use std::fs;
use std::path::Path;

/// Reads a backtest history export: a JSON array of records as returned by the
/// history endpoint.
pub fn load_history(path: &Path) -> Result<Vec<BacktestRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let records = parse_history(&text)
        .with_context(|| format!("Failed to parse history file {}", path.display()))?;

    tracing::info!(path = %path.display(), records = records.len(), "Loaded backtest history");
    Ok(records)
}

pub fn parse_history(text: &str) -> Result<Vec<BacktestRecord>> {
    Ok(serde_json::from_str(text)?)
}
