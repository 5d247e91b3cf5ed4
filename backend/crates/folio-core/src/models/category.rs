use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Portfolio category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Develop,
    Video,
    Design,
    /// Combined video and design work, stored as `video&design`
    VideoAndDesign,
    /// Catch-all bucket, hidden from the specialised galleries
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Develop,
        Self::Video,
        Self::Design,
        Self::VideoAndDesign,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Develop => "develop",
            Self::Video => "video",
            Self::Design => "design",
            Self::VideoAndDesign => "video&design",
            Self::Other => "other",
        }
    }

    /// Map a stored category string, falling back to `Other` for anything
    /// outside the known vocabulary.
    pub fn from_legacy(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or(Self::Other)
    }
}

impl FromStr for Category {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "develop" => Ok(Self::Develop),
            "video" => Ok(Self::Video),
            "design" => Ok(Self::Design),
            "video&design" => Ok(Self::VideoAndDesign),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Category::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Read a stored `categories` list, dropping entries outside the known
/// vocabulary. An unknown name is not a claim on the `other` gallery.
pub fn deserialize_known<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;

    Ok(names
        .iter()
        .filter_map(|name| match Category::from_str(name.trim()) {
            Ok(category) => Some(category),
            Err(_) => {
                debug!("Dropping unknown category '{}'", name);
                None
            }
        })
        .collect())
}
