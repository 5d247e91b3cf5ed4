use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    FilterConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub filter: FilterConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default location.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from_dir(&config_dir)
    }

    /// Load config from an explicit directory, still honouring env overrides.
    pub fn load_from_dir(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.filter.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  filter cache: {} (ttl={}s, max_entries={})",
            if self.filter.cache_enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.filter.cache_ttl_secs,
            self.filter.max_cache_entries
        );
        info!(
            "  filter sort: {} {}",
            self.filter.default_sort_by, self.filter.default_sort_order
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        let filter = &mut self.filter;
        env_override("FOLIO_CACHE_ENABLED", &mut filter.cache_enabled, parse_flag);
        env_override("FOLIO_CACHE_TTL_SECS", &mut filter.cache_ttl_secs, parse_value);
        env_override("FOLIO_MAX_CACHE_ENTRIES", &mut filter.max_cache_entries, parse_value);
        env_override("FOLIO_DEFAULT_SORT_BY", &mut filter.default_sort_by, parse_value);
        env_override("FOLIO_DEFAULT_SORT_ORDER", &mut filter.default_sort_order, parse_value);

        let logging = &mut self.logging;
        env_override("FOLIO_LOG_LEVEL", &mut logging.level, parse_value);
        env_override("FOLIO_LOG_COLORED", &mut logging.colored, parse_flag);
        env_override("FOLIO_LOG_FILE", &mut logging.file, |raw| Some(Some(raw.to_string())));
    }
}

/// Overwrite `target` when `var_name` is set and `parse` accepts its value.
/// Unusable values leave the file/default setting in place.
fn env_override<T>(var_name: &str, target: &mut T, parse: impl FnOnce(&str) -> Option<T>) {
    if let Ok(raw) = std::env::var(var_name)
        && let Some(value) = parse(raw.trim())
    {
        *target = value;
    }
}

fn parse_value<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// "true"/"1" enable, anything else disables
fn parse_flag(raw: &str) -> Option<bool> {
    Some(raw.eq_ignore_ascii_case("true") || raw == "1")
}
