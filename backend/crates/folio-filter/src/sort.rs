use crate::{SortBy, SortOptions, SortOrder};

use folio_core::EnhancedContentRecord;

use std::cmp::Ordering;

/// Return a sorted copy of `items`; the input is left untouched.
///
/// The sort is stable in both directions: records comparing equal keep their
/// input order.
pub fn sort_items(
    items: &[EnhancedContentRecord],
    options: &SortOptions,
) -> Vec<EnhancedContentRecord> {
    let mut sorted = items.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, options.sort_by);
        match options.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    sorted
}

fn compare(a: &EnhancedContentRecord, b: &EnhancedContentRecord, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::UpdatedAt => a.last_updated().cmp(&b.last_updated()),
        SortBy::Title => a
            .title
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.title.chars().flat_map(char::to_lowercase)),
        SortBy::Priority => a.priority.cmp(&b.priority),
        SortBy::EffectiveDate => a.effective_date().cmp(&b.effective_date()),
    }
}
