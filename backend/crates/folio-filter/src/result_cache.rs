use crate::Clock;

use folio_config::FilterConfig;
use folio_core::EnhancedContentRecord;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;

#[derive(Debug, Clone)]
struct CacheEntry {
    items: Vec<EnhancedContentRecord>,
    inserted_at: Instant,
}

/// Counters describing cache activity since the filter was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups that had to run the filter pipeline
    pub misses: u64,
    pub entries: usize,
}

/// Query result cache with a fixed freshness window.
///
/// Purely an optimisation: clearing it at any time never changes results.
#[derive(Debug)]
pub struct ResultCache<C: Clock> {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    enabled: bool,
    clock: C,
    hits: u64,
    misses: u64,
}

impl<C: Clock> ResultCache<C> {
    pub fn new(config: &FilterConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: config.cache_ttl(),
            max_entries: config.max_cache_entries.max(1),
            enabled: config.cache_enabled,
            clock,
            hits: 0,
            misses: 0,
        }
    }

    /// Fresh result for `key`, if any. Expired entries are dropped on the way.
    pub fn get(&mut self, key: &str) -> Option<Vec<EnhancedContentRecord>> {
        if !self.enabled {
            self.misses += 1;
            return None;
        }

        let now = self.clock.now();
        let fresh = self
            .entries
            .get(key)
            .map(|entry| self.is_fresh(entry, now));

        match fresh {
            Some(true) => {
                self.hits += 1;
                debug!("Gallery cache hit: {}", key);
                self.entries.get(key).map(|entry| entry.items.clone())
            }
            Some(false) => {
                self.entries.remove(key);
                self.misses += 1;
                debug!("Gallery cache entry expired: {}", key);
                None
            }
            None => {
                self.misses += 1;
                debug!("Gallery cache miss: {}", key);
                None
            }
        }
    }

    pub fn insert(&mut self, key: String, items: Vec<EnhancedContentRecord>) {
        if !self.enabled {
            return;
        }

        let now = self.clock.now();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.purge_expired(now);

            if self.entries.len() >= self.max_entries {
                self.evict_oldest();
            }
        }

        self.entries.insert(
            key,
            CacheEntry {
                items,
                inserted_at: now,
            },
        );
    }

    /// Drop every entry and its timestamp
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) < self.ttl
    }

    fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < ttl);

        let purged = before - self.entries.len();
        if purged > 0 {
            debug!("Purged {} expired gallery cache entries", purged);
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!("Evicted oldest gallery cache entry: {}", key);
        }
    }
}
