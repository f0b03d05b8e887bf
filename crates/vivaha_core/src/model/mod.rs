//! Domain model for all planner collections.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the serialized JSON shape compatible with the legacy browser
//!   payloads (camelCase fields, display-cased enum strings).
//!
//! # Invariants
//! - Every record is identified by an opaque `String` id; new records get a
//!   UUIDv4.
//! - Updates are shallow merges of explicit patch structs, never partial
//!   in-place edits across ownership boundaries.

pub mod budget;
pub mod gallery;
pub mod guest;
pub mod room;
pub mod table;
pub mod task;
pub mod timeline;
pub mod vendor;

use uuid::Uuid;

/// Generates a fresh opaque record id.
///
/// Legacy data may carry short numeric ids ("1", "101"); new records always
/// get a UUIDv4 so id collisions are structurally ruled out.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
