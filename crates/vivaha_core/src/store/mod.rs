//! Domain store and cross-entity consistency helpers.
//!
//! # Responsibility
//! - Own the authoritative in-memory copy of every planner collection.
//! - Write each collection back through the slot repository after every
//!   mutation (write-through, program order, last write wins).
//! - Keep guest/table and guest/room back-references coherent.
//!
//! # Invariants
//! - The store is the sole owner of the collections; callers receive slice
//!   views and explicitly-constructed patches, never mutable aliases.
//! - Capacity violations surface as errors and leave collections unchanged.

mod lodging;
mod seating;
mod seed;
mod stats;
mod wedding;

pub use lodging::RoomDraft;
pub use stats::{BudgetSummary, RoomOccupancy};
pub use wedding::WeddingStore;

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
///
/// Plain CRUD on an absent id is a silent no-op and never reaches here; only
/// the consistency helpers report missing records, because skipping one side
/// of a relation would leave it incoherent.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence write/read failure; fatal to the operation, not the
    /// process.
    Repo(RepoError),
    /// A slot held JSON that does not match the collection shape.
    Codec {
        slot: &'static str,
        source: serde_json::Error,
    },
    /// Assignment refused: the table or room is already at capacity.
    CapacityExceeded {
        container: &'static str,
        id: String,
        capacity: u32,
    },
    GuestNotFound(String),
    TableNotFound(String),
    RoomNotFound(String),
    /// Guest has no RSVP or is already seated elsewhere.
    GuestNotEligible(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Codec { slot, source } => {
                write!(f, "invalid persisted data in slot `{slot}`: {source}")
            }
            Self::CapacityExceeded {
                container,
                id,
                capacity,
            } => write!(f, "{container} {id} is at capacity ({capacity})"),
            Self::GuestNotFound(id) => write!(f, "guest not found: {id}"),
            Self::TableNotFound(id) => write!(f, "table not found: {id}"),
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
            Self::GuestNotEligible(id) => {
                write!(f, "guest {id} is not eligible for seating")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Codec { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
