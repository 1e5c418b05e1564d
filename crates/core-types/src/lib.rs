pub mod enums;
pub mod error;
pub mod structs;
pub mod timestamp;

// Re-export the core types to provide a clean public API.
pub use enums::{OrderSide, Period};
pub use error::CoreError;
pub use structs::{BacktestMetrics, BacktestRecord, Trade};
