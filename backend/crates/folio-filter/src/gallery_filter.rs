use crate::{
    CacheStats, Clock, FilterOptions, FilterResult, ResultCache, SystemClock, apply_criteria,
    dedup_records,
};

use folio_config::FilterConfig;
use folio_core::{ContentItem, EnhancedContentRecord, GalleryType};

use std::collections::BTreeMap;

use log::{debug, error};

/// Gallery query engine owning the per-query result cache.
///
/// Not shared between threads: every query takes `&mut self`.
#[derive(Debug)]
pub struct GalleryFilter<C: Clock = SystemClock> {
    cache: ResultCache<C>,
}

impl GalleryFilter<SystemClock> {
    pub fn new(config: &FilterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for GalleryFilter<SystemClock> {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

impl<C: Clock> GalleryFilter<C> {
    pub fn with_clock(config: &FilterConfig, clock: C) -> Self {
        Self {
            cache: ResultCache::new(config, clock),
        }
    }

    /// Records shown in `gallery` for the given criteria.
    ///
    /// Never fails: any error is logged and yields an empty list so a broken
    /// query cannot take a page down with it. The only error source today is
    /// the cache key, which cannot fail for plain option values; the fallback
    /// stays as the boundary for any fallible step added to the pipeline.
    pub fn filter_items_for_gallery(
        &mut self,
        items: &[ContentItem],
        gallery: GalleryType,
        options: &FilterOptions,
    ) -> Vec<EnhancedContentRecord> {
        self.try_filter_items_for_gallery(items, gallery, options)
            .unwrap_or_else(|e| {
                error!(
                    "Gallery filter for '{}' failed, returning no items: {}",
                    gallery, e
                );
                Vec::new()
            })
    }

    /// Same as [`Self::filter_items_for_gallery`] but surfaces the error.
    pub fn try_filter_items_for_gallery(
        &mut self,
        items: &[ContentItem],
        gallery: GalleryType,
        options: &FilterOptions,
    ) -> FilterResult<Vec<EnhancedContentRecord>> {
        self.cached(gallery, options, || {
            evaluate(items.iter().map(ContentItem::to_enhanced), gallery, options)
        })
    }

    /// Run several gallery queries over the same input, normalising it once.
    ///
    /// A failing query yields an empty list for its gallery only.
    pub fn batch_filter_for_galleries(
        &mut self,
        items: &[ContentItem],
        galleries: &[GalleryType],
        options: &FilterOptions,
    ) -> BTreeMap<GalleryType, Vec<EnhancedContentRecord>> {
        let normalized: Vec<EnhancedContentRecord> =
            items.iter().map(ContentItem::to_enhanced).collect();

        let mut results = BTreeMap::new();

        for &gallery in galleries {
            let records = self
                .cached(gallery, options, || {
                    evaluate(normalized.iter().cloned(), gallery, options)
                })
                .unwrap_or_else(|e| {
                    error!(
                        "Batch filter for '{}' failed, returning no items: {}",
                        gallery, e
                    );
                    Vec::new()
                });

            results.insert(gallery, records);
        }

        results
    }

    /// Drop every cached result
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        debug!("Gallery cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn cached<F>(
        &mut self,
        gallery: GalleryType,
        options: &FilterOptions,
        compute: F,
    ) -> FilterResult<Vec<EnhancedContentRecord>>
    where
        F: FnOnce() -> Vec<EnhancedContentRecord>,
    {
        let key = options.cache_key(gallery)?;

        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let records = compute();
        debug!("Gallery '{}' matched {} records", gallery, records.len());

        self.cache.insert(key, records.clone());
        Ok(records)
    }
}

/// Gallery match, then option criteria, then dedup by id
fn evaluate(
    records: impl Iterator<Item = EnhancedContentRecord>,
    gallery: GalleryType,
    options: &FilterOptions,
) -> Vec<EnhancedContentRecord> {
    let in_gallery = records
        .filter(|record| gallery.accepts(&record.categories))
        .collect();

    dedup_records(apply_criteria(in_gallery, options))
}
