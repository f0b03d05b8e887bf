//! Task model and the shared event-category enum.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// Wedding function a task or itinerary item belongs to.
///
/// Shared by [`Task`] and [`crate::model::timeline::TimelineItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Haldi,
    Mehendi,
    Wedding,
    Reception,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// One planning checklist task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// ISO date-time string as serialized by the legacy front end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a pending task with a fresh id.
    pub fn new(title: impl Into<String>, category: EventCategory, priority: TaskPriority) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            category,
            description: None,
            assigned_to: None,
            deadline: None,
            priority,
            status: TaskStatus::Pending,
        }
    }
}

/// Shallow-merge patch for [`Task`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<EventCategory>,
    pub description: Option<Option<String>>,
    pub assigned_to: Option<Option<String>>,
    pub deadline: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
