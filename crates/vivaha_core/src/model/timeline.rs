//! Itinerary timeline model.

use crate::model::new_id;
use crate::model::task::EventCategory;
use serde::{Deserialize, Serialize};

/// One itinerary entry ("14:30 — Baraat arrival").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    /// Display time string, e.g. "14:30" or "10:00 AM"; not parsed by core.
    pub time: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: EventCategory,
}

impl TimelineItem {
    pub fn new(
        time: impl Into<String>,
        title: impl Into<String>,
        category: EventCategory,
    ) -> Self {
        Self {
            id: new_id(),
            time: time.into(),
            title: title.into(),
            description: None,
            category,
        }
    }
}

/// Shallow-merge patch for [`TimelineItem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineItemPatch {
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<EventCategory>,
}

impl TimelineItemPatch {
    pub fn apply(self, item: &mut TimelineItem) {
        if let Some(time) = self.time {
            item.time = time;
        }
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
    }
}
