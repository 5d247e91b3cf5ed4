use crate::ContentStatus;
use crate::models::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legacy single-category content record, as written by the first CMS version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,

    // Display
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,

    // Classification
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,

    // Workflow
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub priority: i32,

    // Audit
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Free-text body kept from the markdown era
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ContentRecord {
    pub fn new(id: String, title: String, category: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            category,
            tags: Vec::new(),
            status: ContentStatus::Published,
            priority: 0,
            created_at,
            updated_at: None,
            content: None,
        }
    }
}
