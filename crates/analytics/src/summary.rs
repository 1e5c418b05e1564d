use core_types::{BacktestMetrics, BacktestRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Headline statistics over a set of backtests.
///
/// Every field is zero for an empty set, so a display never has to deal with NaN.
/// Values are not rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub count: usize,
    pub avg_roi: f64,
    pub best_roi: f64,
    pub avg_win_rate: f64,
    pub avg_sharpe: f64,
    pub best_sharpe: f64,
    pub avg_max_drawdown: f64,
}

/// Reduces a set of backtests to an `AggregateSummary`.
///
/// Accepts owned records or the borrowed view returned by `filter_by_period`.
pub fn summarize<R: Borrow<BacktestRecord>>(records: &[R]) -> AggregateSummary {
    if records.is_empty() {
        return AggregateSummary::default();
    }

    let metrics = || {
        records
            .iter()
            .map(|r| &Borrow::<BacktestRecord>::borrow(r).metrics)
    };

    AggregateSummary {
        count: records.len(),
        avg_roi: mean(metrics().map(|m| m.roi), records.len()),
        best_roi: best(metrics(), |m| m.roi),
        avg_win_rate: mean(metrics().map(|m| m.win_rate), records.len()),
        avg_sharpe: mean(metrics().map(|m| m.sharpe_ratio), records.len()),
        best_sharpe: best(metrics(), |m| m.sharpe_ratio),
        avg_max_drawdown: mean(metrics().map(|m| m.max_drawdown), records.len()),
    }
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    values.sum::<f64>() / len as f64
}

// Callers guarantee at least one record.
fn best<'a>(
    metrics: impl Iterator<Item = &'a BacktestMetrics>,
    field: impl Fn(&BacktestMetrics) -> f64,
) -> f64 {
    metrics.map(field).fold(f64::NEG_INFINITY, f64::max)
}
