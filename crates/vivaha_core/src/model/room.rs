//! Room allocation model and the saved-hotel address book.
//!
//! # Responsibility
//! - Define the room record, its type/status enums, and the saved hotel
//!   shape used by the room-details e-mail workflow.
//!
//! # Invariants
//! - `guest_ids` is unique and never exceeds `capacity`; the lodging helpers
//!   are the only writers.
//! - `email_sent_at` is stamped only after a room-details e-mail succeeds.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

/// One allocated hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub room_number: String,
    /// Serialized as `type` to match the legacy payload field name.
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub capacity: u32,
    /// Guests lodged in this room, unique, len <= capacity.
    pub guest_ids: Vec<String>,
    pub status: RoomStatus,
    /// Epoch milliseconds of the last successful room-details e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sent_at: Option<i64>,
}

impl Room {
    pub fn new(room_number: impl Into<String>, kind: RoomType, capacity: u32) -> Self {
        Self {
            id: new_id(),
            room_number: room_number.into(),
            kind,
            capacity,
            guest_ids: Vec::new(),
            status: RoomStatus::Available,
            email_sent_at: None,
        }
    }
}

/// Shallow-merge patch for [`Room`].
///
/// `guest_ids` is intentionally absent: membership changes only through the
/// lodging draft workflow, which keeps the guest back-reference in sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub room_number: Option<String>,
    pub kind: Option<RoomType>,
    pub capacity: Option<u32>,
    pub status: Option<RoomStatus>,
    pub email_sent_at: Option<Option<i64>>,
}

impl RoomPatch {
    pub fn apply(self, room: &mut Room) {
        if let Some(room_number) = self.room_number {
            room.room_number = room_number;
        }
        if let Some(kind) = self.kind {
            room.kind = kind;
        }
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        if let Some(status) = self.status {
            room.status = status;
        }
        if let Some(email_sent_at) = self.email_sent_at {
            room.email_sent_at = email_sent_at;
        }
    }
}

/// Hotel entry saved for the room-details e-mail workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedHotel {
    pub id: String,
    pub name: String,
    pub location: String,
}

impl SavedHotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            location: location.into(),
        }
    }
}
