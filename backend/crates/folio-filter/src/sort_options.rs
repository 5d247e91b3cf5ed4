use crate::{FilterError, FilterResult};

use folio_config::FilterConfig;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Field a gallery listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    CreatedAt,
    /// Falls back to `createdAt` for records never edited
    UpdatedAt,
    /// Case-insensitive
    Title,
    Priority,
    /// Manual date when enabled, otherwise `createdAt`
    EffectiveDate,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Title => "title",
            Self::Priority => "priority",
            Self::EffectiveDate => "effectiveDate",
        }
    }
}

impl FromStr for SortBy {
    type Err = FilterError;

    #[track_caller]
    fn from_str(s: &str) -> FilterResult<Self> {
        match s {
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "effectiveDate" => Ok(Self::EffectiveDate),
            _ => Err(FilterError::InvalidSortField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = FilterError;

    #[track_caller]
    fn from_str(s: &str) -> FilterResult<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(FilterError::InvalidSortOrder {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOptions {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl SortOptions {
    pub fn new(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    /// Default ordering from configuration
    pub fn from_config(config: &FilterConfig) -> FilterResult<Self> {
        Ok(Self {
            sort_by: config.default_sort_by.parse()?,
            sort_order: config.default_sort_order.parse()?,
        })
    }
}
