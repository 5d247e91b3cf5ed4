mod config;
mod error;
mod filter_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use filter_config::FilterConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".folio";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CACHE_ENABLED: bool = true;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const MIN_CACHE_TTL_SECS: u64 = 1;
const MAX_CACHE_TTL_SECS: u64 = 86_400;
const DEFAULT_MAX_CACHE_ENTRIES: usize = 256;
const MIN_MAX_CACHE_ENTRIES: usize = 1;
const MAX_MAX_CACHE_ENTRIES: usize = 100_000;
const DEFAULT_SORT_BY: &str = "createdAt";
const DEFAULT_SORT_ORDER: &str = "desc";

pub const VALID_SORT_FIELDS: [&str; 5] =
    ["createdAt", "updatedAt", "title", "priority", "effectiveDate"];
pub const VALID_SORT_ORDERS: [&str; 2] = ["asc", "desc"];

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
