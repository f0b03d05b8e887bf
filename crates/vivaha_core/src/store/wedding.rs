//! Authoritative in-memory repository for all planner collections.
//!
//! # Responsibility
//! - Load every collection from its slot on startup, seeding fresh stores.
//! - Provide add/update/remove per entity type with write-through persistence.
//!
//! # Invariants
//! - Mutations persist the affected collection before returning.
//! - `update`/`remove` on an absent id are silent no-ops (still persisted,
//!   matching the source's save-on-every-edit behavior).
//! - Duplicate ids are not checked on `add`; new ids come from UUIDv4, so
//!   collisions only arise when a caller supplies its own id.

use crate::model::budget::{BudgetItem, BudgetItemPatch};
use crate::model::gallery::GalleryItem;
use crate::model::guest::{Guest, GuestPatch};
use crate::model::room::{Room, RoomPatch, SavedHotel};
use crate::model::table::{Table, TablePatch};
use crate::model::task::{Task, TaskPatch};
use crate::model::timeline::{TimelineItem, TimelineItemPatch};
use crate::model::vendor::{Vendor, VendorPatch};
use crate::repo::slot_repo::{
    SlotRepository, SLOT_BUDGET, SLOT_GALLERY, SLOT_GUESTS, SLOT_ROOMS, SLOT_SAVED_HOTELS,
    SLOT_TABLES, SLOT_TASKS, SLOT_TIMELINE, SLOT_VENDORS,
};
use crate::store::{seed, StoreError, StoreResult};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Single authoritative domain store.
///
/// The store owns every collection; views receive slice snapshots and push
/// changes back through explicit operations. One store instance per process
/// is expected, constructed at startup and dropped on shutdown (last write
/// wins when several instances share one database).
pub struct WeddingStore<R: SlotRepository> {
    pub(crate) repo: R,
    pub(crate) guests: Vec<Guest>,
    pub(crate) vendors: Vec<Vendor>,
    pub(crate) budget_items: Vec<BudgetItem>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) tables: Vec<Table>,
    pub(crate) timeline: Vec<TimelineItem>,
    pub(crate) gallery: Vec<GalleryItem>,
    pub(crate) rooms: Vec<Room>,
    pub(crate) saved_hotels: Vec<SavedHotel>,
}

impl<R: SlotRepository> WeddingStore<R> {
    /// Loads every collection from the repository.
    ///
    /// Slots that have never been written fall back to seed data: guests,
    /// vendors, budget items, and rooms get the fixed sample records and are
    /// written back immediately (so seeding happens once per fresh store);
    /// the remaining collections start empty.
    pub fn load(repo: R) -> StoreResult<Self> {
        let guests = load_or_seed(&repo, SLOT_GUESTS, seed::sample_guests)?;
        let vendors = load_or_seed(&repo, SLOT_VENDORS, seed::sample_vendors)?;
        let budget_items = load_or_seed(&repo, SLOT_BUDGET, seed::sample_budget)?;
        let tasks = load_or_seed(&repo, SLOT_TASKS, Vec::new)?;
        let tables = load_or_seed(&repo, SLOT_TABLES, Vec::new)?;
        let timeline = load_or_seed(&repo, SLOT_TIMELINE, Vec::new)?;
        let gallery = load_or_seed(&repo, SLOT_GALLERY, Vec::new)?;
        let rooms = load_or_seed(&repo, SLOT_ROOMS, seed::sample_rooms)?;
        let saved_hotels = load_or_seed(&repo, SLOT_SAVED_HOTELS, Vec::new)?;

        info!(
            "event=store_load module=store status=ok guests={} vendors={} budget_items={} tasks={} tables={} timeline={} gallery={} rooms={} saved_hotels={}",
            guests.len(),
            vendors.len(),
            budget_items.len(),
            tasks.len(),
            tables.len(),
            timeline.len(),
            gallery.len(),
            rooms.len(),
            saved_hotels.len()
        );

        Ok(Self {
            repo,
            guests,
            vendors,
            budget_items,
            tasks,
            tables,
            timeline,
            gallery,
            rooms,
            saved_hotels,
        })
    }

    pub(crate) fn persist<T: Serialize>(
        repo: &R,
        slot: &'static str,
        items: &[T],
    ) -> StoreResult<()> {
        let json = encode(slot, items)?;
        repo.save_slot(slot, &json)?;
        Ok(())
    }

    // Guests

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|guest| guest.id == id)
    }

    pub fn add_guest(&mut self, guest: Guest) -> StoreResult<()> {
        self.guests.push(guest);
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)
    }

    pub fn update_guest(&mut self, id: &str, patch: GuestPatch) -> StoreResult<()> {
        if let Some(guest) = self.guests.iter_mut().find(|guest| guest.id == id) {
            patch.apply(guest);
        }
        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)
    }

    /// Removes a guest and releases any seat or bed they held.
    pub fn remove_guest(&mut self, id: &str) -> StoreResult<()> {
        self.guests.retain(|guest| guest.id != id);

        let mut tables_changed = false;
        for table in &mut self.tables {
            let before = table.guest_ids.len();
            table.guest_ids.retain(|guest_id| guest_id != id);
            tables_changed |= table.guest_ids.len() != before;
        }
        let mut rooms_changed = false;
        for room in &mut self.rooms {
            let before = room.guest_ids.len();
            room.guest_ids.retain(|guest_id| guest_id != id);
            rooms_changed |= room.guest_ids.len() != before;
        }

        Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        if tables_changed {
            Self::persist(&self.repo, SLOT_TABLES, &self.tables)?;
        }
        if rooms_changed {
            Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)?;
        }
        Ok(())
    }

    // Vendors

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn add_vendor(&mut self, vendor: Vendor) -> StoreResult<()> {
        self.vendors.push(vendor);
        Self::persist(&self.repo, SLOT_VENDORS, &self.vendors)
    }

    pub fn update_vendor(&mut self, id: &str, patch: VendorPatch) -> StoreResult<()> {
        if let Some(vendor) = self.vendors.iter_mut().find(|vendor| vendor.id == id) {
            patch.apply(vendor);
        }
        Self::persist(&self.repo, SLOT_VENDORS, &self.vendors)
    }

    pub fn remove_vendor(&mut self, id: &str) -> StoreResult<()> {
        self.vendors.retain(|vendor| vendor.id != id);
        Self::persist(&self.repo, SLOT_VENDORS, &self.vendors)
    }

    // Budget items

    pub fn budget_items(&self) -> &[BudgetItem] {
        &self.budget_items
    }

    pub fn add_budget_item(&mut self, item: BudgetItem) -> StoreResult<()> {
        self.budget_items.push(item);
        Self::persist(&self.repo, SLOT_BUDGET, &self.budget_items)
    }

    pub fn update_budget_item(&mut self, id: &str, patch: BudgetItemPatch) -> StoreResult<()> {
        if let Some(item) = self.budget_items.iter_mut().find(|item| item.id == id) {
            patch.apply(item);
        }
        Self::persist(&self.repo, SLOT_BUDGET, &self.budget_items)
    }

    pub fn remove_budget_item(&mut self, id: &str) -> StoreResult<()> {
        self.budget_items.retain(|item| item.id != id);
        Self::persist(&self.repo, SLOT_BUDGET, &self.budget_items)
    }

    // Tasks

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add_task(&mut self, task: Task) -> StoreResult<()> {
        self.tasks.push(task);
        Self::persist(&self.repo, SLOT_TASKS, &self.tasks)
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> StoreResult<()> {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            patch.apply(task);
        }
        Self::persist(&self.repo, SLOT_TASKS, &self.tasks)
    }

    pub fn remove_task(&mut self, id: &str) -> StoreResult<()> {
        self.tasks.retain(|task| task.id != id);
        Self::persist(&self.repo, SLOT_TASKS, &self.tasks)
    }

    // Tables

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.id == id)
    }

    pub fn add_table(&mut self, table: Table) -> StoreResult<()> {
        self.tables.push(table);
        Self::persist(&self.repo, SLOT_TABLES, &self.tables)
    }

    pub fn update_table(&mut self, id: &str, patch: TablePatch) -> StoreResult<()> {
        if let Some(table) = self.tables.iter_mut().find(|table| table.id == id) {
            patch.apply(table);
        }
        Self::persist(&self.repo, SLOT_TABLES, &self.tables)
    }

    /// Removes a table and releases every guest seated at it.
    pub fn remove_table(&mut self, id: &str) -> StoreResult<()> {
        self.tables.retain(|table| table.id != id);
        let mut guests_changed = false;
        for guest in &mut self.guests {
            if guest.assigned_table_id.as_deref() == Some(id) {
                guest.assigned_table_id = None;
                guests_changed = true;
            }
        }
        Self::persist(&self.repo, SLOT_TABLES, &self.tables)?;
        if guests_changed {
            Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        }
        Ok(())
    }

    // Timeline

    pub fn timeline(&self) -> &[TimelineItem] {
        &self.timeline
    }

    pub fn add_timeline_item(&mut self, item: TimelineItem) -> StoreResult<()> {
        self.timeline.push(item);
        Self::persist(&self.repo, SLOT_TIMELINE, &self.timeline)
    }

    pub fn update_timeline_item(&mut self, id: &str, patch: TimelineItemPatch) -> StoreResult<()> {
        if let Some(item) = self.timeline.iter_mut().find(|item| item.id == id) {
            patch.apply(item);
        }
        Self::persist(&self.repo, SLOT_TIMELINE, &self.timeline)
    }

    pub fn remove_timeline_item(&mut self, id: &str) -> StoreResult<()> {
        self.timeline.retain(|item| item.id != id);
        Self::persist(&self.repo, SLOT_TIMELINE, &self.timeline)
    }

    // Gallery (add/remove only, as in the source)

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn add_gallery_item(&mut self, item: GalleryItem) -> StoreResult<()> {
        self.gallery.push(item);
        Self::persist(&self.repo, SLOT_GALLERY, &self.gallery)
    }

    pub fn remove_gallery_item(&mut self, id: &str) -> StoreResult<()> {
        self.gallery.retain(|item| item.id != id);
        Self::persist(&self.repo, SLOT_GALLERY, &self.gallery)
    }

    // Rooms (membership changes go through the lodging helpers)

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn add_room(&mut self, room: Room) -> StoreResult<()> {
        self.rooms.push(room);
        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)
    }

    pub fn update_room(&mut self, id: &str, patch: RoomPatch) -> StoreResult<()> {
        if let Some(room) = self.rooms.iter_mut().find(|room| room.id == id) {
            patch.apply(room);
        }
        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)
    }

    pub fn remove_room(&mut self, id: &str) -> StoreResult<()> {
        self.rooms.retain(|room| room.id != id);
        let mut guests_changed = false;
        for guest in &mut self.guests {
            if guest.assigned_room_id.as_deref() == Some(id) {
                guest.assigned_room_id = None;
                guests_changed = true;
            }
        }
        Self::persist(&self.repo, SLOT_ROOMS, &self.rooms)?;
        if guests_changed {
            Self::persist(&self.repo, SLOT_GUESTS, &self.guests)?;
        }
        Ok(())
    }

    // Saved hotels

    pub fn saved_hotels(&self) -> &[SavedHotel] {
        &self.saved_hotels
    }

    pub fn add_saved_hotel(&mut self, hotel: SavedHotel) -> StoreResult<()> {
        self.saved_hotels.push(hotel);
        Self::persist(&self.repo, SLOT_SAVED_HOTELS, &self.saved_hotels)
    }

    pub fn remove_saved_hotel(&mut self, id: &str) -> StoreResult<()> {
        self.saved_hotels.retain(|hotel| hotel.id != id);
        Self::persist(&self.repo, SLOT_SAVED_HOTELS, &self.saved_hotels)
    }
}

fn load_or_seed<R, T, F>(repo: &R, slot: &'static str, seed: F) -> StoreResult<Vec<T>>
where
    R: SlotRepository,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match repo.load_slot(slot)? {
        Some(json) => decode(slot, &json),
        None => {
            let items = seed();
            if !items.is_empty() {
                let json = encode(slot, &items)?;
                repo.save_slot(slot, &json)?;
                info!(
                    "event=store_seed module=store status=ok slot={slot} count={}",
                    items.len()
                );
            }
            Ok(items)
        }
    }
}

fn decode<T: DeserializeOwned>(slot: &'static str, json: &str) -> StoreResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| StoreError::Codec { slot, source })
}

fn encode<T: Serialize>(slot: &'static str, items: &[T]) -> StoreResult<String> {
    serde_json::to_string(items).map_err(|source| StoreError::Codec { slot, source })
}
