use folio_config::ConfigError;
use folio_filter::FilterError;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type CliResult<T> = std::result::Result<T, CliError>;
