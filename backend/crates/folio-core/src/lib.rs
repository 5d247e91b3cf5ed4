//! Domain model for the portfolio gallery: content records in their legacy and
//! enhanced shapes, the category vocabulary, and the JSON ingestion boundary.

pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::category::Category;
pub use models::content_item::{ContentItem, parse_item, parse_items};
pub use models::content_record::ContentRecord;
pub use models::content_status::ContentStatus;
pub use models::enhanced_content_record::EnhancedContentRecord;
pub use models::gallery_type::GalleryType;
pub use models::status_filter::StatusFilter;
pub use models::timestamp::parse_timestamp;
