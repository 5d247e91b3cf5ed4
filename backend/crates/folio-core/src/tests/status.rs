use crate::{ContentStatus, StatusFilter};

use std::str::FromStr;

#[test]
fn test_content_status_from_str() {
    assert_eq!(
        ContentStatus::from_str("published").unwrap(),
        ContentStatus::Published
    );
    assert_eq!(ContentStatus::from_str("draft").unwrap(), ContentStatus::Draft);
    assert_eq!(
        ContentStatus::from_str("archived").unwrap(),
        ContentStatus::Archived
    );
    assert_eq!(
        ContentStatus::from_str("scheduled").unwrap(),
        ContentStatus::Scheduled
    );
    assert!(ContentStatus::from_str("deleted").is_err());
}

#[test]
fn test_content_status_default() {
    assert_eq!(ContentStatus::default(), ContentStatus::Published);
}

#[test]
fn test_status_filter_default_is_published_only() {
    let filter = StatusFilter::default();

    assert!(filter.matches(ContentStatus::Published));
    assert!(!filter.matches(ContentStatus::Draft));
    assert!(!filter.matches(ContentStatus::Archived));
    assert!(!filter.matches(ContentStatus::Scheduled));
}

#[test]
fn given_all_when_parsed_then_matches_every_status() {
    // When
    let filter = StatusFilter::from_str("all").unwrap();

    // Then
    assert_eq!(filter, StatusFilter::All);
    assert!(filter.matches(ContentStatus::Draft));
    assert!(filter.matches(ContentStatus::Scheduled));
}

#[test]
fn test_status_filter_from_str() {
    assert_eq!(
        StatusFilter::from_str("draft").unwrap(),
        StatusFilter::Only(ContentStatus::Draft)
    );
    assert!(StatusFilter::from_str("everything").is_err());
}

#[test]
fn test_status_filter_serde_uses_plain_strings() {
    let json = serde_json::to_string(&StatusFilter::All).unwrap();
    assert_eq!(json, r#""all""#);

    let parsed: StatusFilter = serde_json::from_str(r#""archived""#).unwrap();
    assert_eq!(parsed, StatusFilter::Only(ContentStatus::Archived));
}
