use folio_core::{Category, StatusFilter};
use folio_filter::FilterOptions;

use clap::Args;

/// Criteria flags shared by every subcommand
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CriteriaArgs {
    /// Keep records in this category (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<Category>,

    /// Keep records with a tag containing this text (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Keep records whose effective date falls in this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Status to include, or "all" (default: published)
    #[arg(long)]
    pub status: Option<StatusFilter>,
}

impl CriteriaArgs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_options(&self) -> FilterOptions {
        FilterOptions {
            categories: (!self.categories.is_empty()).then(|| self.categories.clone()),
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            year: self.year,
            search: self.search.clone(),
            status: self.status,
        }
    }
}
