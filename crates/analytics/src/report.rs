use crate::series::{DrawdownSeries, EquitySeries, PerformanceSeries};
use crate::summary::AggregateSummary;
use crate::tier::WinRateTier;
use chrono::{DateTime, Utc};
use core_types::{BacktestRecord, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Trade-log statistics for a single backtest.
///
/// Only closed trades (those with a realised P&L) are counted. Ratios that would divide
/// by zero are `None` rather than infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReport {
    // I. Trade Counts
    pub closed_trades: usize,
    pub open_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,

    // II. Profitability
    pub net_pnl: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    pub win_rate_pct: Option<Decimal>, // None with no closed trades
    pub profit_factor: Option<Decimal>, // None when gross loss is 0
    pub average_win: Decimal,
    pub average_loss: Decimal,
    pub payoff_ratio: Option<Decimal>,
    pub expectancy: Decimal,

    // III. Extremes
    pub best_trade: Option<Decimal>,
    pub worst_trade: Option<Decimal>,
    pub max_consecutive_losses: usize,

    // IV. Time-Based Metrics
    #[serde(with = "humantime_serde")]
    pub average_holding_period: Duration,
}

impl TradeReport {
    /// Creates a new, zeroed-out TradeReport.
    pub fn new() -> Self {
        Self {
            closed_trades: 0,
            open_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            net_pnl: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            win_rate_pct: None,
            profit_factor: None,
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            payoff_ratio: None,
            expectancy: Decimal::ZERO,
            best_trade: None,
            worst_trade: None,
            max_consecutive_losses: 0,
            average_holding_period: Duration::ZERO,
        }
    }
}

impl Default for TradeReport {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the "recent backtests" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentBacktest {
    pub id: i64,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
    pub roi: f64,
    pub sharpe_ratio: f64,
    pub win_rate: f64,
    pub win_rate_tier: WinRateTier,
    pub max_drawdown: f64,
}

impl From<&BacktestRecord> for RecentBacktest {
    fn from(record: &BacktestRecord) -> Self {
        let m = &record.metrics;
        Self {
            id: record.id,
            symbol: record.symbol.clone(),
            created_at: record.created_at,
            roi: m.roi,
            sharpe_ratio: m.sharpe_ratio,
            win_rate: m.win_rate,
            win_rate_tier: WinRateTier::classify(m.win_rate),
            max_drawdown: m.max_drawdown,
        }
    }
}

/// Everything the dashboard shows for one period, computed from a single history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub period: Period,
    /// Earliest creation time included; `None` when the window is unbounded.
    pub cutoff: Option<DateTime<Utc>>,
    pub summary: AggregateSummary,
    /// The newest backtest in the window, whose curve feeds `equity` and `drawdown`.
    pub latest_backtest_id: Option<i64>,
    pub equity: Option<EquitySeries>,
    pub drawdown: Option<DrawdownSeries>,
    pub performance: PerformanceSeries,
    /// The newest backtests in the window, newest first.
    pub recent: Vec<RecentBacktest>,
}
