//! # Perfscope Analytics Engine
//!
//! This crate turns a history of completed backtests into the numbers and series a
//! performance dashboard displays.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** No I/O and no clock. The reference time is always an argument, so
//!   every result is a deterministic function of its inputs.
//! - **Degenerate data is not an error:** An empty history, an empty window or an empty
//!   equity curve yield zeros, `None` or an empty series.
//! - **Inputs are read-only:** The period filter hands back a borrowed view in input
//!   order; everything else is freshly allocated.
//!
//! ## Public API
//!
//! - `resolve_cutoff` / `filter_by_period`: scope the history to a `Period`.
//! - `summarize`: mean and best of the headline metrics.
//! - `build_equity_series`, `build_drawdown_series`, `build_performance_series`: chart data.
//! - `AnalyticsEngine`: composes the above into a `DashboardSnapshot` and derives a
//!   `TradeReport` from a trade log.
//! - `WinRateTier`: badge grading for a win rate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod filter;
pub mod report;
pub mod series;
pub mod summary;
pub mod tier;
pub mod window;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, DEFAULT_PERFORMANCE_LIMIT, DEFAULT_RECENT_LIMIT};
pub use error::AnalyticsError;
pub use filter::{filter_by_period, most_recent_first};
pub use report::{DashboardSnapshot, RecentBacktest, TradeReport};
pub use series::{
    build_drawdown_series, build_equity_series, build_performance_series, DrawdownPoint,
    DrawdownSeries, EquityPoint, EquitySeries, PerformanceBar, PerformanceSeries,
};
pub use summary::{summarize, AggregateSummary};
pub use tier::WinRateTier;
pub use window::resolve_cutoff;
