use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_ENABLED, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_MAX_CACHE_ENTRIES, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, MAX_CACHE_TTL_SECS,
    MAX_MAX_CACHE_ENTRIES, MIN_CACHE_TTL_SECS, MIN_MAX_CACHE_ENTRIES, VALID_SORT_FIELDS,
    VALID_SORT_ORDERS,
};

use std::time::Duration;

use serde::Deserialize;

/// Gallery filter result cache and default ordering
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Serve repeated queries from the result cache
    pub cache_enabled: bool,
    /// How long a cached result stays fresh
    pub cache_ttl_secs: u64,
    /// Upper bound on cached queries before the oldest is evicted
    pub max_cache_entries: usize,
    pub default_sort_by: String,
    pub default_sort_order: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            cache_enabled: DEFAULT_CACHE_ENABLED,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_cache_entries: DEFAULT_MAX_CACHE_ENTRIES,
            default_sort_by: String::from(DEFAULT_SORT_BY),
            default_sort_order: String::from(DEFAULT_SORT_ORDER),
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_CACHE_TTL_SECS..=MAX_CACHE_TTL_SECS).contains(&self.cache_ttl_secs) {
            return Err(ConfigError::filter(format!(
                "filter.cache_ttl_secs must be {}-{}, got {}",
                MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS, self.cache_ttl_secs
            )));
        }

        if !(MIN_MAX_CACHE_ENTRIES..=MAX_MAX_CACHE_ENTRIES).contains(&self.max_cache_entries) {
            return Err(ConfigError::filter(format!(
                "filter.max_cache_entries must be {}-{}, got {}",
                MIN_MAX_CACHE_ENTRIES, MAX_MAX_CACHE_ENTRIES, self.max_cache_entries
            )));
        }

        if !VALID_SORT_FIELDS.contains(&self.default_sort_by.as_str()) {
            return Err(ConfigError::filter(format!(
                "filter.default_sort_by must be one of {:?}, got '{}'",
                VALID_SORT_FIELDS, self.default_sort_by
            )));
        }

        if !VALID_SORT_ORDERS.contains(&self.default_sort_order.as_str()) {
            return Err(ConfigError::filter(format!(
                "filter.default_sort_order must be one of {:?}, got '{}'",
                VALID_SORT_ORDERS, self.default_sort_order
            )));
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
