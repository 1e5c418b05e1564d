use crate::error::AnalyticsError;
use crate::filter::{filter_by_period, most_recent_first};
use crate::report::{DashboardSnapshot, RecentBacktest, TradeReport};
use crate::series::{build_drawdown_series, build_equity_series, build_performance_series};
use crate::summary::summarize;
use crate::window::resolve_cutoff;
use chrono::{DateTime, Utc};
use core_types::{BacktestRecord, Period, Trade};
use rust_decimal::Decimal;
use std::time::Duration;

/// How many bars the performance chart shows unless configured otherwise.
pub const DEFAULT_PERFORMANCE_LIMIT: usize = 10;

/// How many rows the recent-backtests list holds unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A stateless calculator for deriving dashboard analytics from backtest history.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    performance_limit: usize,
    recent_limit: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PERFORMANCE_LIMIT)
    }
}

impl AnalyticsEngine {
    pub fn new(performance_limit: usize) -> Self {
        Self {
            performance_limit,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    /// The main entry point for the dashboard view.
    ///
    /// # Arguments
    ///
    /// * `records` - The full backtest history, in any order.
    /// * `period` - The window to scope the analytics to.
    /// * `now` - The reference time the window is measured back from.
    ///
    /// # Returns
    ///
    /// A `DashboardSnapshot` with the summary over the window, the equity and drawdown
    /// curves of its newest backtest, ROI bars and a recent-runs list for its newest runs.
    pub fn snapshot(
        &self,
        records: &[BacktestRecord],
        period: Period,
        now: DateTime<Utc>,
    ) -> DashboardSnapshot {
        let in_window = filter_by_period(records, period, now);
        let summary = summarize(&in_window);

        let newest = most_recent_first(&in_window);
        let latest = newest.first().copied();

        tracing::debug!(
            %period,
            total = records.len(),
            in_window = in_window.len(),
            latest = ?latest.map(|r| r.id),
            "Built dashboard snapshot"
        );

        DashboardSnapshot {
            period,
            cutoff: resolve_cutoff(period, now),
            summary,
            latest_backtest_id: latest.map(|r| r.id),
            equity: latest.and_then(build_equity_series),
            drawdown: latest.and_then(build_drawdown_series),
            performance: build_performance_series(&newest, self.performance_limit),
            recent: newest
                .iter()
                .take(self.recent_limit)
                .map(|r| RecentBacktest::from(*r))
                .collect(),
        }
    }

    /// Looks up one backtest by id.
    pub fn find<'a>(
        &self,
        records: &'a [BacktestRecord],
        id: i64,
    ) -> Result<&'a BacktestRecord, AnalyticsError> {
        let found = records.iter().find(|r| r.id == id);
        tracing::debug!(id, total = records.len(), found = found.is_some(), "Looked up backtest");
        found.ok_or(AnalyticsError::RecordNotFound(id))
    }

    /// Calculates trade-log statistics for one backtest.
    pub fn trade_report(&self, trades: &[Trade]) -> TradeReport {
        let mut report = TradeReport::new();
        report.open_trades = trades.iter().filter(|t| !t.is_closed()).count();

        let pnls: Vec<Decimal> = trades.iter().filter_map(|t| t.pnl).collect();
        if !pnls.is_empty() {
            self.calculate_profitability(&pnls, &mut report);
            self.calculate_streaks(&pnls, &mut report);
            self.calculate_time_metrics(trades, &mut report);
        }

        tracing::debug!(
            trades = trades.len(),
            closed = report.closed_trades,
            open = report.open_trades,
            "Built trade report"
        );
        report
    }

    /// Calculates all profitability-related metrics from realised P&L.
    ///
    /// Sums saturate at the `Decimal` bounds, and a ratio that does not fit stays `None`.
    fn calculate_profitability(&self, pnls: &[Decimal], report: &mut TradeReport) {
        report.closed_trades = pnls.len();

        for &pnl in pnls {
            report.net_pnl = report.net_pnl.saturating_add(pnl);

            if pnl > Decimal::ZERO {
                report.gross_profit = report.gross_profit.saturating_add(pnl);
                report.winning_trades += 1;
            } else if pnl < Decimal::ZERO {
                report.gross_loss = report.gross_loss.saturating_add(pnl.abs());
                report.losing_trades += 1;
            }
        }

        // --- Ratios ---
        report.win_rate_pct = Some(
            (Decimal::from(report.winning_trades) / Decimal::from(report.closed_trades))
                * Decimal::ONE_HUNDRED,
        );

        if report.gross_loss > Decimal::ZERO {
            report.profit_factor = report.gross_profit.checked_div(report.gross_loss);
        }

        if report.winning_trades > 0 {
            report.average_win = report.gross_profit / Decimal::from(report.winning_trades);
        }

        if report.losing_trades > 0 {
            report.average_loss = report.gross_loss / Decimal::from(report.losing_trades);
            report.payoff_ratio = report.average_win.checked_div(report.average_loss);
        }

        report.expectancy = report.net_pnl / Decimal::from(report.closed_trades);
        report.best_trade = pnls.iter().copied().max();
        report.worst_trade = pnls.iter().copied().min();
    }

    /// Finds the longest run of losing trades, in trade-log order.
    fn calculate_streaks(&self, pnls: &[Decimal], report: &mut TradeReport) {
        let mut current = 0;
        for pnl in pnls {
            if *pnl < Decimal::ZERO {
                current += 1;
                report.max_consecutive_losses = report.max_consecutive_losses.max(current);
            } else {
                current = 0;
            }
        }
    }

    /// Calculates time-based metrics over trades that have an exit date.
    fn calculate_time_metrics(&self, trades: &[Trade], report: &mut TradeReport) {
        let held: Vec<i128> = trades
            .iter()
            .filter_map(|t| t.exit_date.map(|exit| i128::from((exit - t.entry_date).num_seconds())))
            .collect();

        if held.is_empty() {
            return;
        }

        let avg_secs = held.iter().sum::<i128>() / held.len() as i128;
        report.average_holding_period =
            Duration::from_secs(u64::try_from(avg_secs.max(0)).unwrap_or(u64::MAX));
    }
}
