use crate::{CliError, CliResult, Commands};

use folio_config::{Config, FilterConfig};
use folio_core::{ContentItem, EnhancedContentRecord, GalleryType, parse_items};
use folio_filter::{GalleryFilter, SortBy, SortOptions, SortOrder, get_filtered_stats, sort_items};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::{debug, info};
use serde_json::Value;

/// Execute one subcommand and return its JSON output.
pub fn run(command: &Commands, config: &Config) -> CliResult<Value> {
    let mut filter = GalleryFilter::new(&config.filter);

    match command {
        Commands::Filter {
            input,
            gallery,
            criteria,
            sort_by,
            order,
        } => {
            let items = load_items(input)?;
            let records =
                filter.try_filter_items_for_gallery(&items, *gallery, &criteria.to_options())?;
            let sort = sort_options(&config.filter, *sort_by, *order)?;

            to_json(&sort_items(&records, &sort))
        }

        Commands::Batch {
            input,
            galleries,
            criteria,
        } => {
            let items = load_items(input)?;
            let sort = sort_options(&config.filter, None, None)?;

            let results: BTreeMap<GalleryType, Vec<EnhancedContentRecord>> = filter
                .batch_filter_for_galleries(&items, galleries, &criteria.to_options())
                .into_iter()
                .map(|(gallery, records)| (gallery, sort_items(&records, &sort)))
                .collect();

            to_json(&results)
        }

        Commands::Stats {
            input,
            gallery,
            criteria,
        } => {
            let items = load_items(input)?;

            let records = match gallery {
                Some(gallery) => {
                    filter.try_filter_items_for_gallery(&items, *gallery, &criteria.to_options())?
                }
                None if criteria.is_empty() => {
                    items.iter().map(ContentItem::to_enhanced).collect()
                }
                None => filter.try_filter_items_for_gallery(
                    &items,
                    GalleryType::All,
                    &criteria.to_options(),
                )?,
            };

            to_json(&get_filtered_stats(&records))
        }
    }
}

/// Read a JSON export and keep every entry that parses as a record.
pub fn load_items(path: &Path) -> CliResult<Vec<ContentItem>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_items(&value);
    info!("Loaded {} items from {}", items.len(), path.display());

    Ok(items)
}

fn sort_options(
    config: &FilterConfig,
    sort_by: Option<SortBy>,
    order: Option<SortOrder>,
) -> CliResult<SortOptions> {
    let defaults = SortOptions::from_config(config)?;
    let options = SortOptions::new(
        sort_by.unwrap_or(defaults.sort_by),
        order.unwrap_or(defaults.sort_order),
    );
    debug!("Sorting by {} {}", options.sort_by, options.sort_order);

    Ok(options)
}

#[track_caller]
fn to_json<T: serde::Serialize>(output: &T) -> CliResult<Value> {
    serde_json::to_value(output).map_err(|source| CliError::Output {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
