//! Guest domain model.
//!
//! # Responsibility
//! - Define the guest record and its invitation lifecycle states.
//! - Provide the patch shape used for shallow-merge updates.
//!
//! # Invariants
//! - `status` transitions freely; there is no enforced state machine.
//! - `rsvp` is independent of invitation `status`.
//! - `assigned_table_id` / `assigned_room_id` are back-references kept in
//!   sync by the seating/lodging helpers, never written ad hoc.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// Invitation delivery/response state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestStatus {
    /// Invitation not dispatched yet.
    #[serde(rename = "Not Sent")]
    NotSent,
    /// Invitation dispatched, no response.
    Sent,
    /// Guest confirmed attendance.
    Confirmed,
    /// Guest declined.
    Declined,
}

/// One invited guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub status: GuestStatus,
    /// Confirmed-attendance flag; legacy payloads may omit it.
    #[serde(default)]
    pub rsvp: bool,
    /// Room back-reference, managed by the lodging helpers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_room_id: Option<String>,
    /// Table back-reference, managed by the seating helpers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_table_id: Option<String>,
}

impl Guest {
    /// Creates a guest with a fresh id and no assignments.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
        status: GuestStatus,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            phone: phone.into(),
            city: city.into(),
            status,
            rsvp: false,
            assigned_room_id: None,
            assigned_table_id: None,
        }
    }
}

/// Shallow-merge patch for [`Guest`].
///
/// `None` leaves a field untouched. The assignment back-references are
/// deliberately absent; only the seating and lodging helpers write those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub status: Option<GuestStatus>,
    pub rsvp: Option<bool>,
}

impl GuestPatch {
    /// Merges present fields over `guest`, preserving everything else.
    pub fn apply(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name;
        }
        if let Some(phone) = self.phone {
            guest.phone = phone;
        }
        if let Some(city) = self.city {
            guest.city = city;
        }
        if let Some(status) = self.status {
            guest.status = status;
        }
        if let Some(rsvp) = self.rsvp {
            guest.rsvp = rsvp;
        }
    }
}
