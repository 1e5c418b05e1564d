use core_types::BacktestRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// One point of an equity line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub step_label: String,
    pub value: f64,
}

/// The equity curve of a single backtest, ready to plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquitySeries {
    pub points: Vec<EquityPoint>,
}

/// One bar of the cross-sectional ROI chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBar {
    pub category_label: String,
    pub value: f64,
    /// Drives the bar colour. Zero is not positive.
    pub is_positive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub bars: Vec<PerformanceBar>,
}

/// Percentage decline from the running peak at one step of the equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    pub step_label: String,
    pub drawdown_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawdownSeries {
    pub points: Vec<DrawdownPoint>,
}

impl EquitySeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PerformanceSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn step_label(index: usize) -> String {
    format!("Step {}", index + 1)
}

/// Builds the equity line for one backtest, or `None` when it has no curve to plot.
pub fn build_equity_series(record: &BacktestRecord) -> Option<EquitySeries> {
    if record.equity_curve.is_empty() {
        return None;
    }

    let points = record
        .equity_curve
        .iter()
        .enumerate()
        .map(|(i, &value)| EquityPoint {
            step_label: step_label(i),
            value,
        })
        .collect();

    Some(EquitySeries { points })
}

/// Builds ROI bars for the first `limit` records, in the order given.
///
/// No sorting happens here; pass records newest first to chart the latest runs.
pub fn build_performance_series<R: Borrow<BacktestRecord>>(
    records: &[R],
    limit: usize,
) -> PerformanceSeries {
    let bars = records
        .iter()
        .take(limit)
        .map(|r| {
            let record: &BacktestRecord = r.borrow();
            let value = record.metrics.roi;
            PerformanceBar {
                category_label: record.symbol.clone(),
                value,
                is_positive: value > 0.0,
            }
        })
        .collect();

    PerformanceSeries { bars }
}

/// Builds the underwater curve for one backtest, or `None` when it has no curve.
///
/// Each step holds `(value - peak) / peak * 100` against the highest value seen so far,
/// so readings are zero or negative. Steps where the running peak is not positive read 0.
pub fn build_drawdown_series(record: &BacktestRecord) -> Option<DrawdownSeries> {
    let first = *record.equity_curve.first()?;

    let mut peak = first;
    let points = record
        .equity_curve
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            peak = peak.max(value);
            let drawdown_pct = if peak > 0.0 {
                (value - peak) / peak * 100.0
            } else {
                0.0
            };
            DrawdownPoint {
                step_label: step_label(i),
                drawdown_pct,
            }
        })
        .collect();

    Some(DrawdownSeries { points })
}
