use crate::FilterOptions;

use folio_core::{Category, EnhancedContentRecord};

use chrono::Datelike;

/// Narrow normalised records by the option criteria, in the order
/// status, categories, tags, year, search.
pub fn apply_criteria(
    mut records: Vec<EnhancedContentRecord>,
    options: &FilterOptions,
) -> Vec<EnhancedContentRecord> {
    let status = options.status_filter();
    records.retain(|record| status.matches(record.status));

    if let Some(categories) = options.categories.as_deref()
        && !categories.is_empty()
    {
        records.retain(|record| matches_any_category(record, categories));
    }

    let tags = lowercase_needles(options.tags.as_deref().unwrap_or_default());
    if !tags.is_empty() {
        records.retain(|record| matches_any_tag(record, &tags));
    }

    if let Some(year) = options.year {
        records.retain(|record| record.effective_date().year() == year);
    }

    if let Some(search) = options.search.as_deref()
        && !search.trim().is_empty()
    {
        let needle = search.trim().to_lowercase();
        records.retain(|record| matches_search(record, &needle));
    }

    records
}

pub fn matches_any_category(record: &EnhancedContentRecord, categories: &[Category]) -> bool {
    categories.iter().any(|category| record.has_category(*category))
}

/// `needles` must already be lowercase
pub fn matches_any_tag(record: &EnhancedContentRecord, needles: &[String]) -> bool {
    record.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        needles.iter().any(|needle| tag.contains(needle.as_str()))
    })
}

/// `needle` must already be lowercase
pub fn matches_search(record: &EnhancedContentRecord, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&record.title)
        || contains(&record.description)
        || record.content.as_deref().is_some_and(contains)
        || record.tags.iter().any(|tag| contains(tag))
}

fn lowercase_needles(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}
