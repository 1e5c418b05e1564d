use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("No backtest with id {0} in the supplied history")]
    RecordNotFound(i64),
}
