use crate::enums::OrderSide;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The headline performance figures reported for a single backtest.
///
/// Percent-valued fields (`roi`, `max_drawdown`, `win_rate`) are expressed in percent,
/// e.g. `12.5` for 12.5%. `max_drawdown` is non-positive by convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestMetrics {
    pub total_return: f64,
    pub roi: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub total_trades: u32,
    pub profit_factor: f64,
}

/// A single entry of a backtest's trade log.
///
/// Exit fields are absent while a trade is still open at the end of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(with = "crate::timestamp")]
    pub entry_date: DateTime<Utc>,
    pub entry_price: Decimal,
    #[serde(default, with = "crate::timestamp::option")]
    pub exit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
    #[serde(default)]
    pub pnl_percent: Option<f64>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub side: Option<OrderSide>,
}

impl Trade {
    /// A trade is closed once it has a realised P&L.
    pub fn is_closed(&self) -> bool {
        self.pnl.is_some()
    }
}

/// One completed backtest, as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRecord {
    pub id: i64,
    pub strategy_id: i64,
    pub symbol: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::timestamp::option")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp::option")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metrics: BacktestMetrics,
    /// Portfolio value at successive simulation steps, oldest first.
    #[serde(default)]
    pub equity_curve: Vec<f64>,
    #[serde(default)]
    pub trades: Vec<Trade>,
}
