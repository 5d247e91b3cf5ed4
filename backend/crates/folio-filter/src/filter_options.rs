use crate::{FilterError, FilterResult};

use folio_core::{Category, GalleryType, StatusFilter};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Optional criteria narrowing a gallery query.
///
/// Lists match if any entry matches; different criteria all have to hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    /// Case-insensitive substrings matched against item tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Year of the effective date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Case-insensitive substring over title, description, body and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Defaults to published only when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
}

impl FilterOptions {
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status.unwrap_or_default()
    }

    /// Cache key covering the gallery and every option that affects the result
    #[track_caller]
    pub fn cache_key(&self, gallery: GalleryType) -> FilterResult<String> {
        let options = serde_json::to_string(self).map_err(|e| FilterError::CacheKey {
            gallery: gallery.to_string(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(format!("{}:{}", gallery, options))
    }
}
