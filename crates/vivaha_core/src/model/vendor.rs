//! Vendor domain model.
//!
//! # Invariants
//! - `paid <= amount` is advisory only; the record does not enforce it.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// Vendor booking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorStatus {
    Booked,
    Pending,
    Cancelled,
}

/// One contracted (or prospective) vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    /// Free-text category ("Catering", "Photography", ...).
    pub category: String,
    pub contact: String,
    /// Total contracted amount.
    pub amount: f64,
    /// Amount remitted so far.
    pub paid: f64,
    pub status: VendorStatus,
}

impl Vendor {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        contact: impl Into<String>,
        amount: f64,
        status: VendorStatus,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            category: category.into(),
            contact: contact.into(),
            amount,
            paid: 0.0,
            status,
        }
    }

    /// Percentage of the contracted amount remitted so far, rounded.
    ///
    /// Defined as 0 when `amount` is not positive (no division by zero).
    pub fn paid_percentage(&self) -> u32 {
        if self.amount <= 0.0 {
            return 0;
        }
        (100.0 * self.paid / self.amount).round() as u32
    }
}

/// Shallow-merge patch for [`Vendor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub contact: Option<String>,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
    pub status: Option<VendorStatus>,
}

impl VendorPatch {
    pub fn apply(self, vendor: &mut Vendor) {
        if let Some(name) = self.name {
            vendor.name = name;
        }
        if let Some(category) = self.category {
            vendor.category = category;
        }
        if let Some(contact) = self.contact {
            vendor.contact = contact;
        }
        if let Some(amount) = self.amount {
            vendor.amount = amount;
        }
        if let Some(paid) = self.paid {
            vendor.paid = paid;
        }
        if let Some(status) = self.status {
            vendor.status = status;
        }
    }
}
