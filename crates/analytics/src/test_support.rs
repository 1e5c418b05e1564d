//! Fixture builders shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_types::{BacktestMetrics, BacktestRecord, Trade};
use rust_decimal::Decimal;

pub fn record_created(id: i64, symbol: &str, created_at: DateTime<Utc>) -> BacktestRecord {
    BacktestRecord {
        id,
        strategy_id: 1,
        symbol: symbol.to_string(),
        created_at,
        start_date: None,
        end_date: None,
        metrics: BacktestMetrics::default(),
        equity_curve: Vec::new(),
        trades: Vec::new(),
    }
}

pub fn record_with_metrics(
    id: i64,
    symbol: &str,
    roi: f64,
    win_rate: f64,
    sharpe_ratio: f64,
    max_drawdown: f64,
) -> BacktestRecord {
    let mut record = record_created(id, symbol, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    record.metrics = BacktestMetrics {
        roi,
        win_rate,
        sharpe_ratio,
        max_drawdown,
        ..BacktestMetrics::default()
    };
    record
}

pub fn record_with_curve(id: i64, equity_curve: Vec<f64>) -> BacktestRecord {
    let mut record = record_created(id, "AAPL", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    record.equity_curve = equity_curve;
    record
}

pub fn closed_trade(entry_date: DateTime<Utc>, exit_date: DateTime<Utc>, pnl: Decimal) -> Trade {
    Trade {
        entry_date,
        entry_price: Decimal::ONE_HUNDRED,
        exit_date: Some(exit_date),
        exit_price: Some(Decimal::ONE_HUNDRED.saturating_add(pnl)),
        pnl: Some(pnl),
        pnl_percent: None,
        quantity: Some(Decimal::ONE),
        side: None,
    }
}

pub fn open_trade(entry_date: DateTime<Utc>) -> Trade {
    Trade {
        entry_date,
        entry_price: Decimal::ONE_HUNDRED,
        exit_date: None,
        exit_price: None,
        pnl: None,
        pnl_percent: None,
        quantity: Some(Decimal::ONE),
        side: None,
    }
}
