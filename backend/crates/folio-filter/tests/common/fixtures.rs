#![allow(dead_code)]

use folio_core::{ContentItem, EnhancedContentRecord, parse_items};

use serde_json::{Value, json};

/// Content export as the CMS writes it: three enhanced records, two legacy
/// records and one enhanced draft
pub fn gallery_export() -> Value {
    json!([
        {
            "id": "1",
            "title": "Portfolio Site",
            "description": "Personal site built with React",
            "categories": ["develop"],
            "tags": ["react", "typescript"],
            "status": "published",
            "priority": 5,
            "createdAt": "2024-01-15T10:00:00Z",
            "updatedAt": "2024-02-01T10:00:00Z",
            "originalImages": [],
            "processedImages": []
        },
        {
            "id": "2",
            "title": "Motion Reel",
            "description": "Title sequences and motion graphics",
            "categories": ["video", "design"],
            "tags": ["animation"],
            "status": "published",
            "priority": 3,
            "createdAt": "2023-03-10T10:00:00Z",
            "useManualDate": true,
            "manualDate": "2021-09-01"
        },
        {
            "id": "3",
            "title": "Sketchbook",
            "description": "Assorted experiments",
            "categories": ["other"],
            "isOtherCategory": true,
            "tags": ["misc"],
            "status": "published",
            "priority": 1,
            "createdAt": "2022-08-20T10:00:00Z"
        },
        {
            "id": "4",
            "title": "CLI Tool",
            "description": "Terminal helper",
            "category": "develop",
            "tags": ["rust"],
            "status": "published",
            "priority": 2,
            "createdAt": "2023-06-01T10:00:00Z",
            "content": "A command line utility"
        },
        {
            "id": "5",
            "title": "Poster Series",
            "description": "Screen-printed gig posters",
            "category": "design",
            "tags": ["figma"],
            "status": "published",
            "priority": 4,
            "createdAt": "2023-07-01T10:00:00Z"
        },
        {
            "id": "6",
            "title": "Work in Progress",
            "description": "Not ready yet",
            "categories": ["develop"],
            "tags": ["wip"],
            "status": "draft",
            "priority": 0,
            "createdAt": "2024-03-01T10:00:00Z"
        }
    ])
}

pub fn gallery_items() -> Vec<ContentItem> {
    parse_items(&gallery_export())
}

pub fn ids(records: &[EnhancedContentRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}
