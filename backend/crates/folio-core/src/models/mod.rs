pub mod category;
pub mod content_item;
pub mod content_record;
pub mod content_status;
pub mod enhanced_content_record;
pub mod gallery_type;
pub mod status_filter;
pub mod timestamp;
