//! Seating table model.
//!
//! # Invariants
//! - `guest_ids` is ordered, free of duplicates, and never exceeds
//!   `capacity`; the seating helpers are the only writers.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableShape {
    Round,
    Rectangular,
}

/// One reception table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub capacity: u32,
    /// Seated guests, in assignment order.
    pub guest_ids: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, shape: TableShape, capacity: u32) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            shape,
            capacity,
            guest_ids: Vec::new(),
        }
    }

    /// Whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.guest_ids.len() as u32 >= self.capacity
    }
}

/// Shallow-merge patch for [`Table`].
///
/// `guest_ids` is intentionally absent: seat membership changes only through
/// the seating helpers, which keep the guest back-reference in sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePatch {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub capacity: Option<u32>,
}

impl TablePatch {
    pub fn apply(self, table: &mut Table) {
        if let Some(name) = self.name {
            table.name = name;
        }
        if let Some(shape) = self.shape {
            table.shape = shape;
        }
        if let Some(capacity) = self.capacity {
            table.capacity = capacity;
        }
    }
}
