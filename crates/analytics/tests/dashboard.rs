//! End-to-end checks over a history export in the backend's JSON shape.

use analytics::{
    build_equity_series, build_performance_series, filter_by_period, most_recent_first,
    summarize, AnalyticsEngine, WinRateTier,
};
use chrono::{DateTime, TimeZone, Utc};
use core_types::{BacktestRecord, Period};
use rust_decimal_macros::dec;

fn history() -> Vec<BacktestRecord> {
    serde_json::from_str(include_str!("fixtures/history.json")).expect("fixture parses")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap()
}

fn ids(records: &[&BacktestRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn period_all_is_identity() {
    let records = history();
    let filtered = filter_by_period(&records, Period::All, now());
    assert_eq!(ids(&filtered), vec![11, 12, 13, 14]);
}

#[test]
fn periods_narrow_the_history() {
    let records = history();
    assert_eq!(ids(&filter_by_period(&records, Period::OneMonth, now())), vec![11, 13]);
    assert_eq!(ids(&filter_by_period(&records, Period::SixMonths, now())), vec![11, 12, 13]);
    assert_eq!(ids(&filter_by_period(&records, Period::OneYear, now())), vec![11, 12, 13]);
}

#[test]
fn summary_over_one_month() {
    let records = history();
    let in_window = filter_by_period(&records, Period::OneMonth, now());
    let summary = summarize(&in_window);

    assert_eq!(summary.count, 2);
    assert!((summary.avg_roi - 15.0).abs() < 1e-9);
    assert_eq!(summary.best_roi, 20.0);
    assert!((summary.avg_win_rate - 58.5).abs() < 1e-9);
    assert!((summary.avg_max_drawdown - (-9.5)).abs() < 1e-9);
    assert_eq!(summary.best_sharpe, 2.2);
}

#[test]
fn dashboard_pipeline_charts_latest_first() {
    let records = history();
    let in_window = filter_by_period(&records, Period::SixMonths, now());
    let newest = most_recent_first(&in_window);

    let equity = build_equity_series(newest[0]).expect("latest run has a curve");
    assert_eq!(equity.points.first().map(|p| p.step_label.as_str()), Some("Step 1"));
    assert_eq!(equity.points.last().map(|p| p.value), Some(11000.0));

    let performance = build_performance_series(&newest, 10);
    let bars: Vec<(&str, bool)> = performance
        .bars
        .iter()
        .map(|b| (b.category_label.as_str(), b.is_positive))
        .collect();
    assert_eq!(bars, vec![("AAPL", true), ("TSLA", true), ("MSFT", false)]);
}

#[test]
fn record_without_curve_has_no_equity_series() {
    let records = history();
    let msft = records.iter().find(|r| r.id == 12).unwrap();
    assert!(build_equity_series(msft).is_none());

    let nvda = records.iter().find(|r| r.id == 14).unwrap();
    assert!(build_equity_series(nvda).is_none());
    assert!(!build_performance_series(&[nvda], 1).bars[0].is_positive);
}

#[test]
fn engine_snapshot_serializes_for_presentation() {
    let records = history();
    let snapshot = AnalyticsEngine::new(2).snapshot(&records, Period::OneYear, now());

    assert_eq!(snapshot.latest_backtest_id, Some(11));
    assert_eq!(snapshot.performance.len(), 2);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["period"], "1Y");
    assert_eq!(json["summary"]["count"], 3);
    assert_eq!(json["performance"]["bars"][1]["category_label"], "TSLA");
    assert_eq!(json["recent"][0]["symbol"], "AAPL");
    assert_eq!(json["recent"][0]["win_rate_tier"], "high");
    assert_eq!(json["recent"].as_array().map(Vec::len), Some(3));
}

#[test]
fn trade_report_from_exported_log() {
    let records = history();
    let engine = AnalyticsEngine::default();
    let aapl = engine.find(&records, 11).unwrap();
    let report = engine.trade_report(&aapl.trades);

    assert_eq!(report.closed_trades, 2);
    assert_eq!(report.net_pnl, dec!(250));
    assert_eq!(report.profit_factor, Some(dec!(2)));
    assert_eq!(report.win_rate_pct, Some(dec!(50)));

    let json = serde_json::to_value(&report).unwrap();
    // (10 + 5) days / 2
    assert_eq!(json["average_holding_period"], "7days 12h");
}

#[test]
fn win_rate_badges_follow_the_tiers() {
    let records = history();
    let tiers: Vec<WinRateTier> = records
        .iter()
        .map(|r| WinRateTier::classify(r.metrics.win_rate))
        .collect();
    assert_eq!(
        tiers,
        vec![WinRateTier::High, WinRateTier::Low, WinRateTier::Mid, WinRateTier::Low]
    );
}
