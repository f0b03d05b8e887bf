//! Mood-board gallery model.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryCategory {
    Inspiration,
    Venue,
    Attire,
    Decor,
}

/// One pinned mood-board image. Gallery items are add/remove only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub category: GalleryCategory,
}

impl GalleryItem {
    pub fn new(url: impl Into<String>, category: GalleryCategory) -> Self {
        Self {
            id: new_id(),
            url: url.into(),
            caption: None,
            category,
        }
    }
}
