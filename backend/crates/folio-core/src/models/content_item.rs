use crate::{ContentRecord, CoreError, CoreResult, EnhancedContentRecord};

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A content record in either of the shapes the CMS has written over time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Legacy(ContentRecord),
    Enhanced(EnhancedContentRecord),
}

impl ContentItem {
    /// Shape test for raw JSON: enhanced records carry a `categories` array.
    pub fn is_enhanced(value: &Value) -> bool {
        value
            .get("categories")
            .is_some_and(|categories| categories.is_array())
    }

    /// Deserialize one raw record, picking the shape with [`Self::is_enhanced`].
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if Self::is_enhanced(&value) {
            serde_json::from_value(value).map(Self::Enhanced)
        } else {
            serde_json::from_value(value).map(Self::Legacy)
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Legacy(record) => &record.id,
            Self::Enhanced(record) => &record.id,
        }
    }

    /// Migrate into the enhanced shape, enforcing the category invariants.
    pub fn normalize(self) -> EnhancedContentRecord {
        match self {
            Self::Legacy(record) => record.into(),
            Self::Enhanced(mut record) => {
                record.normalize_categories();
                record
            }
        }
    }

    pub fn to_enhanced(&self) -> EnhancedContentRecord {
        self.clone().normalize()
    }
}

impl From<ContentRecord> for ContentItem {
    fn from(record: ContentRecord) -> Self {
        Self::Legacy(record)
    }
}

impl From<EnhancedContentRecord> for ContentItem {
    fn from(record: EnhancedContentRecord) -> Self {
        Self::Enhanced(record)
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ContentItem::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Read a single entry of a content export.
#[track_caller]
pub fn parse_item(index: usize, value: &Value) -> CoreResult<ContentItem> {
    ContentItem::from_value(value.clone()).map_err(|e| CoreError::Deserialize {
        index,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Read a content export, skipping anything that is not a usable record.
///
/// Non-array input yields an empty list; `null` and malformed entries are
/// dropped with a warning.
pub fn parse_items(value: &Value) -> Vec<ContentItem> {
    let Some(entries) = value.as_array() else {
        warn!("Content export is not an array, ignoring it");
        return Vec::new();
    };

    let mut items = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.is_null() {
            warn!("Skipping null content entry at index {}", index);
            continue;
        }

        match parse_item(index, entry) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping content entry: {}", e),
        }
    }

    items
}
