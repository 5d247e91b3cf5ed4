use crate::models::{category, timestamp};
use crate::{Category, ContentRecord, ContentStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Multi-category content record. Every record handed to the filter is
/// normalised into this shape first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedContentRecord {
    pub id: String,

    // Display
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,

    // Classification
    #[serde(default, deserialize_with = "category::deserialize_known")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub is_other_category: bool,
    /// Single category from the legacy shape, retained for older readers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
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

    // Manual dating
    #[serde(default)]
    pub use_manual_date: bool,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_date: Option<DateTime<Utc>>,

    // Assets (opaque to the filter)
    #[serde(default)]
    pub original_images: Vec<serde_json::Value>,
    #[serde(default)]
    pub processed_images: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl EnhancedContentRecord {
    pub fn new(
        id: String,
        title: String,
        categories: Vec<Category>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut record = Self {
            id,
            title,
            description: String::new(),
            categories,
            is_other_category: false,
            category: None,
            tags: Vec::new(),
            status: ContentStatus::Published,
            priority: 0,
            created_at,
            updated_at: None,
            use_manual_date: false,
            manual_date: None,
            original_images: Vec::new(),
            processed_images: Vec::new(),
            content: None,
        };
        record.normalize_categories();
        record
    }

    /// Date used for sorting and year filtering: the manual date when one is
    /// enabled and present, otherwise `created_at`.
    pub fn effective_date(&self) -> DateTime<Utc> {
        match (self.use_manual_date, self.manual_date) {
            (true, Some(manual)) => manual,
            _ => self.created_at,
        }
    }

    /// `updated_at`, falling back to `created_at` for records never edited
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Enforce the category invariants: never empty, and `is_other_category`
    /// in step with the list.
    pub fn normalize_categories(&mut self) {
        if self.categories.is_empty() {
            let migrated = self
                .category
                .as_deref()
                .map(Category::from_legacy)
                .unwrap_or(Category::Other);
            self.categories.push(migrated);
        }

        self.is_other_category = self.has_category(Category::Other);
    }
}

impl From<ContentRecord> for EnhancedContentRecord {
    fn from(legacy: ContentRecord) -> Self {
        let categories = vec![Category::from_legacy(&legacy.category)];
        let category = (!legacy.category.is_empty()).then_some(legacy.category);

        let mut record = Self {
            id: legacy.id,
            title: legacy.title,
            description: legacy.description,
            categories,
            is_other_category: false,
            category,
            tags: legacy.tags,
            status: legacy.status,
            priority: legacy.priority,
            created_at: legacy.created_at,
            updated_at: legacy.updated_at,
            use_manual_date: false,
            manual_date: None,
            original_images: Vec::new(),
            processed_images: Vec::new(),
            content: legacy.content,
        };
        record.normalize_categories();
        record
    }
}
