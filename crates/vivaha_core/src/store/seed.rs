//! Sample seed records for a fresh persistent store.
//!
//! Ids and values are carried over from the legacy browser data so a
//! migrated database and a fresh one agree on the sample content; the one
//! addition is the guest room back-references, which the legacy seeds left
//! unset. Only guests, vendors, budget items, and rooms ship with seeds;
//! the remaining collections start empty.

use crate::model::budget::BudgetItem;
use crate::model::guest::{Guest, GuestStatus};
use crate::model::room::{Room, RoomStatus, RoomType};
use crate::model::vendor::{Vendor, VendorStatus};

fn guest(
    id: &str,
    name: &str,
    phone: &str,
    city: &str,
    status: GuestStatus,
    rsvp: bool,
    room_id: Option<&str>,
) -> Guest {
    Guest {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        status,
        rsvp,
        assigned_room_id: room_id.map(str::to_string),
        assigned_table_id: None,
    }
}

// Room back-references match the sample room membership below, so a fresh
// store starts with the guest/room relation already coherent.
pub fn sample_guests() -> Vec<Guest> {
    vec![
        guest("1", "Ramesh Gupta", "9876543210", "Mumbai", GuestStatus::Confirmed, true, Some("101")),
        guest("2", "Suresh Patel", "9123456780", "Ahmedabad", GuestStatus::Sent, false, Some("101")),
        guest("3", "Anita Roy", "9988776655", "Delhi", GuestStatus::NotSent, false, Some("103")),
    ]
}

fn vendor(id: &str, name: &str, category: &str, contact: &str, amount: f64, paid: f64) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        contact: contact.to_string(),
        amount,
        paid,
        status: VendorStatus::Booked,
    }
}

pub fn sample_vendors() -> Vec<Vendor> {
    vec![
        vendor("1", "Royal Caterers", "Catering", "9876543210", 500000.0, 200000.0),
        vendor("2", "Shutterbugs Photography", "Photography", "9123456789", 150000.0, 50000.0),
    ]
}

fn budget_item(id: &str, name: &str, value: f64, cost: f64, color: &str) -> BudgetItem {
    BudgetItem {
        id: id.to_string(),
        name: name.to_string(),
        value,
        cost,
        color: color.to_string(),
        category: None,
    }
}

pub fn sample_budget() -> Vec<BudgetItem> {
    vec![
        budget_item("1", "Venue & Catering", 1500000.0, 0.0, "#800000"),
        budget_item("2", "Decoration", 500000.0, 0.0, "#BF2B34"),
        budget_item("3", "Attire & Makeup", 300000.0, 0.0, "#DAA520"),
        budget_item("4", "Photography", 200000.0, 50000.0, "#FFD700"),
        budget_item("5", "Miscellaneous", 100000.0, 0.0, "#333333"),
    ]
}

fn room(
    id: &str,
    room_number: &str,
    kind: RoomType,
    capacity: u32,
    guest_ids: &[&str],
    status: RoomStatus,
) -> Room {
    Room {
        id: id.to_string(),
        room_number: room_number.to_string(),
        kind,
        capacity,
        guest_ids: guest_ids.iter().map(|id| id.to_string()).collect(),
        status,
        email_sent_at: None,
    }
}

pub fn sample_rooms() -> Vec<Room> {
    vec![
        room("101", "101", RoomType::Double, 2, &["1", "2"], RoomStatus::Occupied),
        room("102", "102", RoomType::Double, 2, &[], RoomStatus::Available),
        room("103", "103", RoomType::Suite, 4, &["3"], RoomStatus::Reserved),
        room("104", "104", RoomType::Single, 1, &[], RoomStatus::Available),
    ]
}
