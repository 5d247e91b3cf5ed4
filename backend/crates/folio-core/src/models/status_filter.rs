use crate::{ContentStatus, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status restriction applied by a gallery query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    Only(ContentStatus),
    /// Disables status filtering
    All,
}

impl StatusFilter {
    pub fn matches(&self, status: ContentStatus) -> bool {
        match self {
            Self::Only(expected) => *expected == status,
            Self::All => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Only(status) => status.as_str(),
            Self::All => "all",
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::Only(ContentStatus::Published)
    }
}

impl FromStr for StatusFilter {
    type Err = crate::CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "all" => Ok(Self::All),
            other => ContentStatus::from_str(other).map(Self::Only),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for StatusFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        StatusFilter::from_str(&s).map_err(serde::de::Error::custom)
    }
}
