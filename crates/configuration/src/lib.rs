use crate::error::ConfigError;
use crate::settings::Config;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use core_types::Period;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::{init_logging, LoggingGuard};
pub use settings::{AnalyticsSettings, LoggingSettings};

/// The file read by `load_config` when no other path is given.
pub const DEFAULT_CONFIG_FILE: &str = "perfscope.toml";

/// Prefix for environment overrides, e.g. `PERFSCOPE__ANALYTICS__PERFORMANCE_LIMIT=5`.
pub const ENV_PREFIX: &str = "PERFSCOPE";

/// Loads the application configuration from `perfscope.toml` and the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Loads the application configuration with layered sources.
///
/// 1. Built-in defaults.
/// 2. The TOML file at `path`, if it exists.
/// 3. Environment variables prefixed with `PERFSCOPE__`, using `__` between keys.
///
/// The merged result is deserialized into our strongly-typed `Config` and validated.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = defaults()?
        .add_source(File::from(path).required(false))
        .add_source(env_source());
    finish(builder)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = config::Config::builder()
        .set_default("analytics.default_period", Period::default().as_str())?
        .set_default("analytics.performance_limit", 10)?
        .set_default("analytics.recent_limit", 5)?
        .set_default("logging.level", "info")?;
    Ok(builder)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    let config = builder.build()?.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.analytics.performance_limit == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.performance_limit must be at least 1".to_string(),
        ));
    }
    if config.analytics.recent_limit == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.recent_limit must be at least 1".to_string(),
        ));
    }
    logging::parse_filter(&config.logging.level)?;
    Ok(())
}
