use analytics::{
    build_drawdown_series, build_equity_series, build_performance_series, filter_by_period,
    most_recent_first, summarize, AnalyticsEngine,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use configuration::settings::Config;
use configuration::{init_logging, load_config, load_config_from};
use core_types::{BacktestRecord, Period};
use serde::Serialize;
use std::path::PathBuf;

mod history;
mod render;

/// The main entry point for the perfscope analytics CLI.
fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;

    let _log_guard = init_logging(&config.logging)?;
    tracing::info!("Starting perfscope");

    // Execute the appropriate command
    match cli.command {
        Commands::Dashboard(args) => handle_dashboard(&args, &config)?,
        Commands::Summary(args) => handle_summary(&args, &config)?,
        Commands::Equity { source, id } => handle_equity(&source, &config, id)?,
        Commands::Performance { source, limit } => handle_performance(&source, &config, limit)?,
        Commands::Trades { source, id } => handle_trades(&source, id)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics over a trading-strategy backtest history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./perfscope.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary, recent runs, ROI bars and the latest equity curve for a period.
    Dashboard(HistoryArgs),
    /// Aggregate statistics over the backtests in a period.
    Summary(HistoryArgs),
    /// Equity and drawdown curve of one backtest (the newest in the period by default).
    Equity {
        #[command(flatten)]
        source: HistoryArgs,
        /// The backtest to plot.
        #[arg(long)]
        id: Option<i64>,
    },
    /// ROI of the newest backtests in a period.
    Performance {
        #[command(flatten)]
        source: HistoryArgs,
        /// How many backtests to include (defaults to analytics.performance_limit).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Trade-log statistics of one backtest.
    Trades {
        #[command(flatten)]
        source: HistoryArgs,
        /// The backtest to analyse.
        #[arg(long)]
        id: i64,
    },
}

#[derive(Args)]
struct HistoryArgs {
    /// JSON export of the backtest history.
    #[arg(long)]
    history: PathBuf,

    /// One of 1M, 3M, 6M, 1Y, All (defaults to analytics.default_period).
    #[arg(long)]
    period: Option<Period>,

    /// Reference time for the period window, RFC 3339 (defaults to the current time).
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,
}

impl HistoryArgs {
    fn period(&self, config: &Config) -> Period {
        self.period.unwrap_or(config.analytics.default_period)
    }

    // The only place the wall clock is read.
    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    fn load(&self) -> Result<Vec<BacktestRecord>> {
        history::load_history(&self.history)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_dashboard(args: &HistoryArgs, config: &Config) -> Result<()> {
    let records = args.load()?;
    let period = args.period(config);

    let engine = AnalyticsEngine::new(config.analytics.performance_limit)
        .with_recent_limit(config.analytics.recent_limit);
    let snapshot = engine.snapshot(&records, period, args.now());
    tracing::info!(%period, backtests = snapshot.summary.count, "Dashboard computed");

    if args.json {
        return print_json(&snapshot);
    }

    println!("Overall Statistics");
    println!("{}", render::summary_table(&snapshot.summary, period));

    println!("Recent Backtests ({} total)", snapshot.summary.count);
    println!("{}", render::recent_table(&snapshot.recent));

    println!("Performance");
    println!("{}", render::performance_table(&snapshot.performance));

    match (&snapshot.equity, snapshot.latest_backtest_id) {
        (Some(equity), Some(id)) => {
            println!("Equity Curve (backtest {id})");
            println!("{}", render::equity_table(equity, snapshot.drawdown.as_ref()));
        }
        _ => println!("Equity Curve: no data to plot"),
    }

    Ok(())
}

fn handle_summary(args: &HistoryArgs, config: &Config) -> Result<()> {
    let records = args.load()?;
    let period = args.period(config);

    let in_window = filter_by_period(&records, period, args.now());
    let summary = summarize(&in_window);
    tracing::info!(%period, backtests = summary.count, "Summary computed");

    if args.json {
        return print_json(&summary);
    }
    println!("{}", render::summary_table(&summary, period));
    Ok(())
}

#[derive(Serialize)]
struct EquityOutput<'a> {
    backtest_id: i64,
    symbol: &'a str,
    equity: Option<analytics::EquitySeries>,
    drawdown: Option<analytics::DrawdownSeries>,
}

fn handle_equity(args: &HistoryArgs, config: &Config, id: Option<i64>) -> Result<()> {
    let records = args.load()?;
    let engine = AnalyticsEngine::new(config.analytics.performance_limit);

    let record = match id {
        Some(id) => engine.find(&records, id)?,
        None => {
            let in_window = filter_by_period(&records, args.period(config), args.now());
            match most_recent_first(&in_window).first() {
                Some(latest) => *latest,
                None => {
                    println!("No backtests in the selected period");
                    return Ok(());
                }
            }
        }
    };

    let output = EquityOutput {
        backtest_id: record.id,
        symbol: &record.symbol,
        equity: build_equity_series(record),
        drawdown: build_drawdown_series(record),
    };

    if args.json {
        return print_json(&output);
    }
    match &output.equity {
        Some(equity) => {
            println!("Equity Curve: backtest {} ({})", output.backtest_id, output.symbol);
            println!("{}", render::equity_table(equity, output.drawdown.as_ref()));
        }
        None => println!("Backtest {} has no equity curve to plot", output.backtest_id),
    }
    Ok(())
}

fn handle_performance(args: &HistoryArgs, config: &Config, limit: Option<usize>) -> Result<()> {
    let records = args.load()?;
    let limit = limit.unwrap_or(config.analytics.performance_limit);

    let in_window = filter_by_period(&records, args.period(config), args.now());
    let series = build_performance_series(&most_recent_first(&in_window), limit);

    if args.json {
        return print_json(&series);
    }
    println!("{}", render::performance_table(&series));
    Ok(())
}

fn handle_trades(args: &HistoryArgs, id: i64) -> Result<()> {
    let records = args.load()?;
    let engine = AnalyticsEngine::default();

    let record = engine.find(&records, id)?;
    let report = engine.trade_report(&record.trades);
    tracing::info!(
        backtest_id = id,
        closed = report.closed_trades,
        reported_total = record.metrics.total_trades,
        "Trade report computed"
    );

    if args.json {
        return print_json(&report);
    }
    println!("Trades: backtest {} ({})", record.id, record.symbol);
    println!("{}", render::trade_table(&report));
    Ok(())
}
