use folio_core::EnhancedContentRecord;

use std::collections::HashMap;

use log::warn;

/// Keep one record per id, skipping missing entries.
///
/// A later duplicate replaces the kept record only when it has a higher
/// priority, or the same priority and more categories. The kept record stays
/// at the position where its id first appeared.
pub fn deduplicate_items(items: &[Option<EnhancedContentRecord>]) -> Vec<EnhancedContentRecord> {
    let present = items.iter().enumerate().filter_map(|(index, item)| {
        if item.is_none() {
            warn!("Skipping missing record at index {} during deduplication", index);
        }
        item.clone()
    });

    dedup_records(present)
}

/// Deduplicate records that are known to be present
pub fn dedup_records(
    records: impl IntoIterator<Item = EnhancedContentRecord>,
) -> Vec<EnhancedContentRecord> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<EnhancedContentRecord> = Vec::new();

    for record in records {
        match positions.get(&record.id) {
            Some(&index) => {
                if outranks(&record, &kept[index]) {
                    kept[index] = record;
                }
            }
            None => {
                positions.insert(record.id.clone(), kept.len());
                kept.push(record);
            }
        }
    }

    kept
}

fn outranks(candidate: &EnhancedContentRecord, existing: &EnhancedContentRecord) -> bool {
    candidate.priority > existing.priority
        || (candidate.priority == existing.priority
            && candidate.categories.len() > existing.categories.len())
}
