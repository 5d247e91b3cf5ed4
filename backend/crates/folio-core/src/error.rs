use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid content status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid gallery type: {value} {location}")]
    InvalidGalleryType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp: {value} {location}")]
    InvalidTimestamp {
        value: String,
        location: ErrorLocation,
    },

    #[error("Malformed content record at index {index}: {message} {location}")]
    Deserialize {
        index: usize,
        message: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
