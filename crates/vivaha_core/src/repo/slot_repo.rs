//! Collection-slot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable key-value storage for JSON-serialized collections.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Slot keys are the fixed legacy names (`wedding_guests`, ...); callers
//!   must not invent new keys ad hoc.
//! - `save_slot` overwrites any prior value for the key.

use crate::repo::{guard_schema, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed slot keys, preserved verbatim for migration compatibility with the
/// browser localStorage payloads.
pub const SLOT_GUESTS: &str = "wedding_guests";
pub const SLOT_VENDORS: &str = "wedding_vendors";
pub const SLOT_BUDGET: &str = "wedding_budget";
pub const SLOT_TASKS: &str = "wedding_tasks";
pub const SLOT_TABLES: &str = "wedding_tables";
pub const SLOT_TIMELINE: &str = "wedding_timeline";
pub const SLOT_GALLERY: &str = "wedding_gallery";
pub const SLOT_ROOMS: &str = "wedding_rooms";
pub const SLOT_SAVED_HOTELS: &str = "wedding_saved_hotels";

/// Durable key-value storage for one JSON document per collection.
pub trait SlotRepository {
    /// Returns the stored JSON text for `key`, or `None` when the slot has
    /// never been written (caller falls back to seed data).
    fn load_slot(&self, key: &str) -> RepoResult<Option<String>>;

    /// Writes `json` under `key`, overwriting any prior value.
    fn save_slot(&self, key: &str, json: &str) -> RepoResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Wraps a bootstrapped connection, refusing unmigrated databases.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        guard_schema(conn, "slots")?;
        Ok(Self { conn })
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn load_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save_slot(&self, key: &str, json: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, json],
        )?;
        Ok(())
    }
}
