use folio_core::{Category, ContentStatus, EnhancedContentRecord};

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use serde::Serialize;

/// Aggregate counts over a set of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub total: usize,
    /// A record counts once in every category it carries
    pub by_category: BTreeMap<Category, usize>,
    /// Keyed by effective-date year
    pub by_year: BTreeMap<i32, usize>,
    pub by_status: BTreeMap<ContentStatus, usize>,
}

pub fn get_filtered_stats(items: &[EnhancedContentRecord]) -> FilterStats {
    let mut stats = FilterStats {
        total: items.len(),
        ..FilterStats::default()
    };

    for item in items {
        let categories: BTreeSet<Category> = item.categories.iter().copied().collect();
        for category in categories {
            *stats.by_category.entry(category).or_default() += 1;
        }

        *stats
            .by_year
            .entry(item.effective_date().year())
            .or_default() += 1;
        *stats.by_status.entry(item.status).or_default() += 1;
    }

    stats
}
