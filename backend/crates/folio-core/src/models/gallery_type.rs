use crate::{Category, CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Named gallery view on the portfolio site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GalleryType {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "develop")]
    Develop,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "design")]
    Design,
    #[serde(rename = "video&design")]
    VideoAndDesign,
    #[serde(rename = "other")]
    Other,
}

impl GalleryType {
    pub const ALL: [GalleryType; 6] = [
        Self::All,
        Self::Develop,
        Self::Video,
        Self::Design,
        Self::VideoAndDesign,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Develop => "develop",
            Self::Video => "video",
            Self::Design => "design",
            Self::VideoAndDesign => "video&design",
            Self::Other => "other",
        }
    }

    /// Whether a record with the given categories belongs in this gallery.
    ///
    /// `Other` items only ever show up in the `all` and `other` views. The
    /// `video&design` view is a union over `video`, `design` and `video&design`.
    pub fn accepts(&self, categories: &[Category]) -> bool {
        let is_other = categories.contains(&Category::Other);

        match self {
            Self::All => true,
            Self::Other => is_other,
            Self::Develop => !is_other && categories.contains(&Category::Develop),
            Self::Video => !is_other && categories.contains(&Category::Video),
            Self::Design => !is_other && categories.contains(&Category::Design),
            Self::VideoAndDesign => {
                !is_other
                    && categories.iter().any(|c| {
                        matches!(
                            c,
                            Category::Video | Category::Design | Category::VideoAndDesign
                        )
                    })
            }
        }
    }
}

impl FromStr for GalleryType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "all" => Ok(Self::All),
            "develop" => Ok(Self::Develop),
            "video" => Ok(Self::Video),
            "design" => Ok(Self::Design),
            "video&design" => Ok(Self::VideoAndDesign),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidGalleryType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for GalleryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
