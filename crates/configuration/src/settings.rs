use core_types::Period;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub analytics: AnalyticsSettings,
    pub logging: LoggingSettings,
}

/// Parameters for the dashboard analytics.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    /// The window used when a command does not name one.
    pub default_period: Period,
    /// How many of the newest backtests the ROI bar chart shows.
    pub performance_limit: usize,
    /// How many rows the "recent backtests" table shows.
    pub recent_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `perfscope=debug,analytics=trace`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
