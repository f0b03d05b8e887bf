//! Guest-to-table assignment helpers.
//!
//! # Responsibility
//! - Keep `Table.guest_ids` and `Guest.assigned_table_id` in sync inside a
//!   single helper; callers never update one side on its own.
//!
//! # Invariants
//! - A table never holds more guests than its capacity.
//! - Only guests with `rsvp == true` and no current table are seatable.
//! - A failed assignment leaves both collections untouched.

use crate::model::guest::Guest;
use crate::repo::slot_repo::{SlotRepository, SLOT_GUESTS, SLOT_TABLES};
use crate::store::{StoreError, StoreResult, WeddingStore};

impl<R: SlotRepository> WeddingStore<R> {
    /// Seats a guest at a table, updating both sides of the relation.
    ///
    /// # Errors
    /// - `TableNotFound` / `GuestNotFound` when either id is unknown.
    /// - `GuestNotEligible` when the guest has no RSVP or is already seated.
    /// - `CapacityExceeded` when the table is full; nothing is mutated.
    pub fn assign_guest_to_table(&mut self, table_id: &str, guest_id: &str) -> StoreResult<()> {
        let table = self
            .tables
            .iter()
            .find(|table| table.id == table_id)
            .ok_or_else(|| StoreError::TableNotFound(table_id.to_string()))?;
        let guest = self
            .guests
            .iter()
            .find(|guest| guest.id == guest_id)
            .ok_or_else(|| StoreError::GuestNotFound(guest_id.to_string()))?;

        if !guest.rsvp || guest.assigned_table_id.is_some() {
            return Err(StoreError::GuestNotEligible(guest_id.to_string()));
        }
        if table.is_full() {
            return Err(StoreError::CapacityExceeded {
                container: "table",
                id: table_id.to_string(),
                capacity: table.capacity,
            });
        }

        // Checks passed; now mutate both sides before persisting either.
        if let Some(table) = self.tables.iter_mut().find(|table| table.id == table_id) {
            table.guest_ids.push(guest_id.to_string());
        }
        if let Some(guest) = self.guests.iter_mut().find(|guest| guest.id == guest_id) {
            guest.assigned_table_id = Some(table_id.to_string());
        }

        Self::persist(&self.repo, SLOT_TABLES, &self.tables)?;
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        Ok(())
    }

    /// Releases a guest's seat, clearing both sides of the relation.
    ///
    /// Unknown ids are tolerated on either side; whatever half of the
    /// relation exists is cleared.
    pub fn unassign_guest_from_table(&mut self, table_id: &str, guest_id: &str) -> StoreResult<()> {
        if let Some(table) = self.tables.iter_mut().find(|table| table.id == table_id) {
            table.guest_ids.retain(|id| id != guest_id);
        }
        if let Some(guest) = self.guests.iter_mut().find(|guest| guest.id == guest_id) {
            if guest.assigned_table_id.as_deref() == Some(table_id) {
                guest.assigned_table_id = None;
            }
        }

        Self::persist(&self.repo, SLOT_TABLES, &self.tables)?;
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        Ok(())
    }

    /// The seating pool: guests with an RSVP and no table yet.
    pub fn unassigned_guests(&self) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| guest.rsvp && guest.assigned_table_id.is_none())
            .collect()
    }
}
