//! Gallery content filtering for the portfolio site.
//!
//! Records arrive in mixed legacy/enhanced shapes, are normalised, matched
//! against a gallery view and optional criteria, deduplicated by id and
//! cached per query. Everything works on the fields already present on each
//! record; nothing here touches the filesystem.

pub mod clock;
pub mod criteria;
pub mod dedup;
pub mod error;
pub mod filter_options;
pub mod gallery_filter;
pub mod result_cache;
pub mod sort;
pub mod sort_options;
pub mod stats;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use criteria::apply_criteria;
pub use dedup::{dedup_records, deduplicate_items};
pub use error::{FilterError, FilterResult};
pub use filter_options::FilterOptions;
pub use gallery_filter::GalleryFilter;
pub use result_cache::{CacheStats, ResultCache};
pub use sort::sort_items;
pub use sort_options::{SortBy, SortOptions, SortOrder};
pub use stats::{FilterStats, get_filtered_stats};
