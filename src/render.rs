use analytics::{
    AggregateSummary, DrawdownSeries, EquitySeries, PerformanceSeries, RecentBacktest,
    TradeReport, WinRateTier,
};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use core_types::Period;
use rust_decimal::Decimal;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn signed_cell(value: f64, text: String) -> Cell {
    let cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if value > 0.0 {
        cell.fg(Color::Green)
    } else if value < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn pct(value: f64) -> String {
    format!("{value:.2}%")
}

fn opt_decimal(value: Option<Decimal>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.round_dp(2).to_string())
}

pub fn summary_table(summary: &AggregateSummary, period: Period) -> Table {
    let mut table = new_table(vec!["Statistic", "Value"]);
    table
        .add_row(vec![Cell::new("Period"), Cell::new(period)])
        .add_row(vec![Cell::new("Total Backtests"), Cell::new(summary.count)])
        .add_row(vec![
            Cell::new("Avg ROI"),
            signed_cell(summary.avg_roi, pct(summary.avg_roi)),
        ])
        .add_row(vec![
            Cell::new("Best ROI"),
            signed_cell(summary.best_roi, pct(summary.best_roi)),
        ])
        .add_row(vec![Cell::new("Avg Win Rate"), Cell::new(pct(summary.avg_win_rate))])
        .add_row(vec![
            Cell::new("Avg Sharpe Ratio"),
            Cell::new(format!("{:.2}", summary.avg_sharpe)),
        ])
        .add_row(vec![
            Cell::new("Best Sharpe Ratio"),
            Cell::new(format!("{:.2}", summary.best_sharpe)),
        ])
        .add_row(vec![
            Cell::new("Avg Max Drawdown"),
            signed_cell(summary.avg_max_drawdown, pct(summary.avg_max_drawdown)),
        ]);
    table
}

pub fn recent_table(rows: &[RecentBacktest]) -> Table {
    let mut table = new_table(vec!["Date", "Symbol", "ROI", "Sharpe", "Win Rate", "Max DD"]);
    for row in rows {
        let tier = row.win_rate_tier;
        let tier_color = match tier {
            WinRateTier::High => Color::Green,
            WinRateTier::Mid => Color::Yellow,
            WinRateTier::Low => Color::Red,
        };
        table.add_row(vec![
            Cell::new(row.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&row.symbol),
            signed_cell(row.roi, pct(row.roi)),
            Cell::new(format!("{:.2}", row.sharpe_ratio)),
            Cell::new(format!("{:.1}% ({tier})", row.win_rate)).fg(tier_color),
            signed_cell(row.max_drawdown, pct(row.max_drawdown)),
        ]);
    }
    table
}

pub fn performance_table(series: &PerformanceSeries) -> Table {
    let mut table = new_table(vec!["Symbol", "ROI"]);
    for bar in &series.bars {
        // Zero-ROI bars share the losing colour.
        let color = if bar.is_positive { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(&bar.category_label),
            Cell::new(pct(bar.value))
                .set_alignment(CellAlignment::Right)
                .fg(color),
        ]);
    }
    table
}

pub fn equity_table(equity: &EquitySeries, drawdown: Option<&DrawdownSeries>) -> Table {
    let mut table = new_table(vec!["Step", "Equity", "Drawdown"]);
    for (i, point) in equity.points.iter().enumerate() {
        let dd = drawdown
            .and_then(|d| d.points.get(i))
            .map(|p| p.drawdown_pct)
            .unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(&point.step_label),
            Cell::new(format!("{:.2}", point.value)).set_alignment(CellAlignment::Right),
            signed_cell(dd, pct(dd)),
        ]);
    }
    table
}

pub fn trade_table(report: &TradeReport) -> Table {
    let mut table = new_table(vec!["Statistic", "Value"]);
    table
        .add_row(vec!["Closed Trades".to_string(), report.closed_trades.to_string()])
        .add_row(vec!["Open Trades".to_string(), report.open_trades.to_string()])
        .add_row(vec!["Winning Trades".to_string(), report.winning_trades.to_string()])
        .add_row(vec!["Losing Trades".to_string(), report.losing_trades.to_string()])
        .add_row(vec!["Win Rate %".to_string(), opt_decimal(report.win_rate_pct)])
        .add_row(vec!["Net P&L".to_string(), report.net_pnl.round_dp(2).to_string()])
        .add_row(vec!["Gross Profit".to_string(), report.gross_profit.round_dp(2).to_string()])
        .add_row(vec!["Gross Loss".to_string(), report.gross_loss.round_dp(2).to_string()])
        .add_row(vec!["Profit Factor".to_string(), opt_decimal(report.profit_factor)])
        .add_row(vec!["Average Win".to_string(), report.average_win.round_dp(2).to_string()])
        .add_row(vec!["Average Loss".to_string(), report.average_loss.round_dp(2).to_string()])
        .add_row(vec!["Payoff Ratio".to_string(), opt_decimal(report.payoff_ratio)])
        .add_row(vec!["Expectancy".to_string(), report.expectancy.round_dp(2).to_string()])
        .add_row(vec!["Best Trade".to_string(), opt_decimal(report.best_trade)])
        .add_row(vec!["Worst Trade".to_string(), opt_decimal(report.worst_trade)])
        .add_row(vec![
            "Max Consecutive Losses".to_string(),
            report.max_consecutive_losses.to_string(),
        ])
        .add_row(vec![
            "Avg Holding Period".to_string(),
            humantime_serde::re::humantime::format_duration(report.average_holding_period).to_string(),
        ]);
    table
}
