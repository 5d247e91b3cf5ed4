use crate::tests::{ids, write_export, write_input};
use crate::{CliError, Commands, CriteriaArgs, load_config, load_items, run};

use folio_config::Config;
use folio_core::{Category, GalleryType, StatusFilter};
use folio_filter::{SortBy, SortOrder};

use std::path::PathBuf;

use tempfile::TempDir;

fn filter_command(
    input: PathBuf,
    gallery: GalleryType,
    criteria: CriteriaArgs,
    sort_by: Option<SortBy>,
    order: Option<SortOrder>,
) -> Commands {
    Commands::Filter {
        input,
        gallery,
        criteria,
        sort_by,
        order,
    }
}

fn all_statuses() -> CriteriaArgs {
    CriteriaArgs {
        status: Some(StatusFilter::All),
        ..CriteriaArgs::default()
    }
}

// =========================================================================
// filter
// =========================================================================

#[test]
fn given_export_when_filter_develop_then_published_develop_only() {
    // Given
    let (_temp, input) = write_export();
    let command = filter_command(input, GalleryType::Develop, CriteriaArgs::default(), None, None);

    // When
    let output = run(&command, &Config::default()).unwrap();

    // Then
    assert_eq!(ids(&output), vec!["1"]);
}

#[test]
fn given_status_all_when_filter_develop_then_newest_first_by_default() {
    let (_temp, input) = write_export();
    let command = filter_command(input, GalleryType::Develop, all_statuses(), None, None);

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(ids(&output), vec!["4", "1"]);
}

#[test]
fn given_sort_flags_when_filter_all_then_flags_override_config() {
    let (_temp, input) = write_export();
    let command = filter_command(
        input,
        GalleryType::All,
        CriteriaArgs::default(),
        Some(SortBy::Priority),
        Some(SortOrder::Asc),
    );

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(ids(&output), vec!["1", "3", "2"]);
}

#[test]
fn given_config_sort_defaults_when_filter_without_flags_then_config_order_used() {
    let (_temp, input) = write_export();
    let mut config = Config::default();
    config.filter.default_sort_by = "title".to_string();
    config.filter.default_sort_order = "asc".to_string();
    let command = filter_command(input, GalleryType::All, CriteriaArgs::default(), None, None);

    let output = run(&command, &config).unwrap();

    // Alpha Poster, Notebook, Zeta Dashboard
    assert_eq!(ids(&output), vec!["2", "3", "1"]);
}

#[test]
fn given_legacy_record_when_filtered_then_output_is_enhanced_shape() {
    let (_temp, input) = write_export();
    let command = filter_command(input, GalleryType::Design, CriteriaArgs::default(), None, None);

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(ids(&output), vec!["2"]);
    assert_eq!(output[0]["categories"], serde_json::json!(["design"]));
    assert_eq!(output[0]["isOtherCategory"], false);
}

#[test]
fn given_invalid_config_sort_when_filter_then_filter_error() {
    let (_temp, input) = write_export();
    let mut config = Config::default();
    config.filter.default_sort_by = "views".to_string();
    let command = filter_command(input, GalleryType::All, CriteriaArgs::default(), None, None);

    let result = run(&command, &config);

    assert!(matches!(result, Err(CliError::Filter(_))));
}

// =========================================================================
// batch
// =========================================================================

#[test]
fn given_two_galleries_when_batch_then_object_keyed_by_gallery() {
    let (_temp, input) = write_export();
    let command = Commands::Batch {
        input,
        galleries: vec![GalleryType::Develop, GalleryType::Other],
        criteria: CriteriaArgs::default(),
    };

    let output = run(&command, &Config::default()).unwrap();

    let object = output.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(ids(&output["develop"]), vec!["1"]);
    assert_eq!(ids(&output["other"]), vec!["3"]);
}

#[test]
fn given_category_criteria_when_batch_all_then_criteria_applied() {
    let (_temp, input) = write_export();
    let command = Commands::Batch {
        input,
        galleries: vec![GalleryType::All],
        criteria: CriteriaArgs {
            categories: vec![Category::Design],
            ..CriteriaArgs::default()
        },
    };

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(ids(&output["all"]), vec!["2"]);
}

// =========================================================================
// stats
// =========================================================================

#[test]
fn given_no_gallery_when_stats_then_every_record_counted() {
    let (_temp, input) = write_export();
    let command = Commands::Stats {
        input,
        gallery: None,
        criteria: CriteriaArgs::default(),
    };

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(output["total"], 4);
    assert_eq!(output["byCategory"]["develop"], 2);
    assert_eq!(output["byStatus"]["draft"], 1);
    assert_eq!(output["byYear"]["2024"], 2);
}

#[test]
fn given_gallery_when_stats_then_only_filtered_subset_counted() {
    let (_temp, input) = write_export();
    let command = Commands::Stats {
        input,
        gallery: Some(GalleryType::Develop),
        criteria: CriteriaArgs::default(),
    };

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(output["total"], 1);
    assert_eq!(output["byStatus"]["published"], 1);
}

#[test]
fn given_criteria_without_gallery_when_stats_then_criteria_applied_over_all() {
    let (_temp, input) = write_export();
    let command = Commands::Stats {
        input,
        gallery: None,
        criteria: CriteriaArgs {
            year: Some(2024),
            ..CriteriaArgs::default()
        },
    };

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(output["total"], 1);
}

// =========================================================================
// Input handling
// =========================================================================

#[test]
fn given_missing_file_when_loaded_then_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let result = load_items(&temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(CliError::Io { .. })));
}

#[test]
fn given_malformed_json_when_loaded_then_json_error() {
    let (_temp, input) = write_input("[{\"id\": ");

    let result = load_items(&input);

    assert!(matches!(result, Err(CliError::Json { .. })));
}

#[test]
fn given_non_array_json_when_filtered_then_empty_output() {
    let (_temp, input) = write_input("{\"items\": []}");
    let command = filter_command(input, GalleryType::All, CriteriaArgs::default(), None, None);

    let output = run(&command, &Config::default()).unwrap();

    assert_eq!(output, serde_json::json!([]));
}

#[test]
fn given_junk_entries_when_loaded_then_skipped() {
    let export = serde_json::json!([
        null,
        42,
        { "title": "no id" },
        { "id": "ok", "category": "video", "createdAt": "2024-01-01" }
    ]);
    let (_temp, input) = write_input(&export.to_string());

    let items = load_items(&input).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), "ok");
}

// =========================================================================
// Config loading
// =========================================================================

#[test]
fn given_empty_config_dir_when_loaded_then_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = load_config(Some(temp_dir.path())).unwrap();

    assert!(config.filter.cache_enabled);
    assert_eq!(config.filter.default_sort_by, "createdAt");
}

#[test]
fn given_out_of_range_ttl_when_loaded_then_config_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "[filter]\ncache_ttl_secs = 0\n",
    )
    .unwrap();

    let result = load_config(Some(temp_dir.path()));

    assert!(matches!(result, Err(CliError::Config(_))));
}
