use folio_core::CoreError;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to build cache key for gallery {gallery}: {source} {location}")]
    CacheKey {
        gallery: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid sort field: {value} {location}")]
    InvalidSortField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort order: {value} {location}")]
    InvalidSortOrder {
        value: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type FilterResult<T> = StdResult<T, FilterError>;
