use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "perfscope.log";

/// Keeps the background log writers alive. Dropping it flushes pending output.
#[must_use = "logs are lost once the guard is dropped"]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Parses a filter directive the way `init_logging` will.
pub fn parse_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level)
        .map_err(|e| ConfigError::ValidationError(format!("invalid log level '{level}': {e}")))
}

/// Installs the global tracing subscriber.
///
/// Output goes to stderr through a non-blocking writer, and additionally to a daily
/// rolling file when `settings.directory` is set. `RUST_LOG` overrides `settings.level`.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&settings.level)?,
    };

    let mut guards = Vec::new();

    let (stderr, guard) = tracing_appender::non_blocking(std::io::stderr());
    guards.push(guard);
    let stderr_layer = fmt::layer().with_writer(stderr).with_target(false);

    let file_layer = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);
            Some(fmt::layer().with_writer(writer).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingInit(e.to_string()))?;

    tracing::debug!(directory = ?settings.directory, "Logging initialised");
    Ok(LoggingGuard { _guards: guards })
}
