use crate::get_filtered_stats;
use crate::tests::fixtures::{date, enhanced, gallery_fixture};

use folio_core::{Category, ContentItem, ContentStatus};

#[test]
fn given_fixture_when_stats_then_counts_grouped() {
    // Given
    let records: Vec<_> = gallery_fixture()
        .into_iter()
        .map(ContentItem::normalize)
        .collect();

    // When
    let stats = get_filtered_stats(&records);

    // Then
    assert_eq!(stats.total, 6);
    assert_eq!(stats.by_category[&Category::Develop], 3);
    assert_eq!(stats.by_category[&Category::Video], 1);
    assert_eq!(stats.by_category[&Category::Design], 2);
    assert_eq!(stats.by_category[&Category::Other], 1);
    assert!(!stats.by_category.contains_key(&Category::VideoAndDesign));
    assert_eq!(stats.by_year[&2022], 1);
    assert_eq!(stats.by_year[&2023], 3);
    assert_eq!(stats.by_year[&2024], 2);
    assert_eq!(stats.by_status[&ContentStatus::Published], 5);
    assert_eq!(stats.by_status[&ContentStatus::Draft], 1);
}

#[test]
fn given_manual_date_when_stats_then_year_from_effective_date() {
    let mut record = enhanced("a", &[Category::Video]);
    record.use_manual_date = true;
    record.manual_date = Some(date(2018, 5, 5));

    let stats = get_filtered_stats(&[record]);

    assert_eq!(stats.by_year.len(), 1);
    assert_eq!(stats.by_year[&2018], 1);
}

#[test]
fn given_repeated_category_on_one_item_when_stats_then_counted_once() {
    let mut record = enhanced("a", &[Category::Video]);
    record.categories = vec![Category::Video, Category::Video, Category::Design];

    let stats = get_filtered_stats(&[record]);

    assert_eq!(stats.by_category[&Category::Video], 1);
    assert_eq!(stats.by_category[&Category::Design], 1);
}

#[test]
fn given_no_items_when_stats_then_empty() {
    let stats = get_filtered_stats(&[]);

    assert_eq!(stats.total, 0);
    assert!(stats.by_category.is_empty());
    assert!(stats.by_year.is_empty());
    assert!(stats.by_status.is_empty());
}

#[test]
fn test_stats_serialize_with_wire_keys() {
    let stats = get_filtered_stats(&[enhanced("a", &[Category::VideoAndDesign])]);

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["byCategory"]["video&design"], 1);
    assert_eq!(json["byYear"]["2024"], 1);
    assert_eq!(json["byStatus"]["published"], 1);
}
