//! Room-allocation helpers built around an edit-buffer workflow.
//!
//! # Responsibility
//! - Model the in-progress room edit form as an explicit draft.
//! - Apply a saved draft to the store and reconcile the guest back-reference
//!   on both the added and the removed side.
//!
//! # Invariants
//! - Capacity is checked against the draft's own capacity at toggle time;
//!   nothing persists until the draft is saved.
//! - Removing a guest from a draft always succeeds.
//! - A guest appears in at most one room's membership; saving a draft moves
//!   guests rather than duplicating them.
//! - `email_sent_at` is stamped only through `mark_room_email_sent`.

use crate::model::room::{Room, RoomStatus, RoomType};
use crate::repo::slot_repo::{SlotRepository, SLOT_GUESTS, SLOT_ROOMS};
use crate::store::{StoreError, StoreResult, WeddingStore};

/// In-progress edit buffer for one room form.
///
/// Mirrors the room fields plus a working copy of the guest membership.
/// Changes stay in the buffer until it is saved back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub room_number: String,
    pub kind: RoomType,
    pub capacity: u32,
    pub status: RoomStatus,
    pub guest_ids: Vec<String>,
}

impl RoomDraft {
    /// Starts a blank draft for a new room.
    pub fn new(room_number: impl Into<String>, kind: RoomType, capacity: u32) -> Self {
        Self {
            room_number: room_number.into(),
            kind,
            capacity,
            status: RoomStatus::Available,
            guest_ids: Vec::new(),
        }
    }

    /// Starts a draft pre-filled from an existing room.
    pub fn from_room(room: &Room) -> Self {
        Self {
            room_number: room.room_number.clone(),
            kind: room.kind,
            capacity: room.capacity,
            status: room.status,
            guest_ids: room.guest_ids.clone(),
        }
    }

    /// Toggles a guest's membership in the draft.
    ///
    /// Removal always succeeds. Adding fails with `CapacityExceeded` when
    /// the draft's current membership has reached the draft's capacity (the
    /// in-progress values, not the persisted room state).
    pub fn toggle_guest(&mut self, guest_id: &str) -> StoreResult<()> {
        if let Some(position) = self.guest_ids.iter().position(|id| id == guest_id) {
            self.guest_ids.remove(position);
            return Ok(());
        }

        if self.guest_ids.len() as u32 >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                container: "room",
                id: self.room_number.clone(),
                capacity: self.capacity,
            });
        }

        self.guest_ids.push(guest_id.to_string());
        Ok(())
    }
}

impl<R: SlotRepository> WeddingStore<R> {
    /// Applies a saved draft to an existing room.
    ///
    /// Guests added by the draft get `assigned_room_id` set; guests removed
    /// by it get theirs cleared. Both sides are reconciled in one helper so
    /// the relation cannot drift.
    pub fn save_room_draft(&mut self, room_id: &str, draft: &RoomDraft) -> StoreResult<()> {
        let previous_guest_ids = self
            .rooms
            .iter()
            .find(|room| room.id == room_id)
            .map(|room| room.guest_ids.clone())
            .ok_or_else(|| StoreError::RoomNotFound(room_id.to_string()))?;

        if draft.guest_ids.len() as u32 > draft.capacity {
            return Err(StoreError::CapacityExceeded {
                container: "room",
                id: room_id.to_string(),
                capacity: draft.capacity,
            });
        }

        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id) {
            room.room_number = draft.room_number.clone();
            room.kind = draft.kind;
            room.capacity = draft.capacity;
            room.status = draft.status;
            room.guest_ids = draft.guest_ids.clone();
        }

        self.reconcile_room_guests(room_id, &previous_guest_ids, &draft.guest_ids);

        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)?;
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        Ok(())
    }

    /// Creates a room from a draft, returning the new room's id.
    pub fn add_room_from_draft(&mut self, draft: &RoomDraft) -> StoreResult<String> {
        if draft.guest_ids.len() as u32 > draft.capacity {
            return Err(StoreError::CapacityExceeded {
                container: "room",
                id: draft.room_number.clone(),
                capacity: draft.capacity,
            });
        }

        let mut room = Room::new(draft.room_number.clone(), draft.kind, draft.capacity);
        room.status = draft.status;
        room.guest_ids = draft.guest_ids.clone();
        let room_id = room.id.clone();

        self.rooms.push(room);
        self.reconcile_room_guests(&room_id, &[], &draft.guest_ids);

        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)?;
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        Ok(room_id)
    }

    /// Stamps the room's `email_sent_at` after a room-details e-mail went
    /// out successfully.
    pub fn mark_room_email_sent(&mut self, room_id: &str, now_ms: i64) -> StoreResult<()> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.id == room_id)
            .ok_or_else(|| StoreError::RoomNotFound(room_id.to_string()))?;
        room.email_sent_at = Some(now_ms);
        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)
    }

    fn reconcile_room_guests(&mut self, room_id: &str, previous: &[String], current: &[String]) {
        for guest in &mut self.guests {
            let was_member = previous.contains(&guest.id);
            let is_member = current.contains(&guest.id);
            if is_member && !was_member {
                guest.assigned_room_id = Some(room_id.to_string());
            } else if was_member && !is_member && guest.assigned_room_id.as_deref() == Some(room_id)
            {
                guest.assigned_room_id = None;
            }
        }

        // A guest lodges in at most one room; evict this room's members from
        // every other membership list.
        for room in &mut self.rooms {
            if room.id != room_id {
                room.guest_ids.retain(|id| !current.contains(id));
            }
        }
    }
}
