use vivaha_core::db::{open_db, open_db_in_memory};
use vivaha_core::{
    Guest, GuestPatch, GuestStatus, SqliteSlotRepository, Task, TaskPatch, TaskPriority,
    TaskStatus, EventCategory, Vendor, VendorPatch, VendorStatus, WeddingStore,
};

fn fresh_store(conn: &rusqlite::Connection) -> WeddingStore<SqliteSlotRepository<'_>> {
    let repo = SqliteSlotRepository::try_new(conn).unwrap();
    WeddingStore::load(repo).unwrap()
}

#[test]
fn fresh_store_seeds_sample_collections() {
    let conn = open_db_in_memory().unwrap();
    let store = fresh_store(&conn);

    assert_eq!(store.guests().len(), 3);
    assert_eq!(store.vendors().len(), 2);
    assert_eq!(store.budget_items().len(), 5);
    assert_eq!(store.rooms().len(), 4);

    assert!(store.tasks().is_empty());
    assert!(store.tables().is_empty());
    assert!(store.timeline().is_empty());
    assert!(store.gallery().is_empty());
    assert!(store.saved_hotels().is_empty());

    // Seed guests point back at the rooms that list them.
    assert_eq!(store.guest("1").unwrap().assigned_room_id.as_deref(), Some("101"));
    assert_eq!(store.guest("2").unwrap().assigned_room_id.as_deref(), Some("101"));
    assert_eq!(store.guest("3").unwrap().assigned_room_id.as_deref(), Some("103"));
}

#[test]
fn seeding_happens_once_per_fresh_database() {
    let conn = open_db_in_memory().unwrap();

    let mut store = fresh_store(&conn);
    store.remove_guest("1").unwrap();
    drop(store);

    // A second load sees the persisted collection, not a re-seed.
    let store = fresh_store(&conn);
    assert_eq!(store.guests().len(), 2);
    assert!(store.guest("1").is_none());
}

#[test]
fn add_update_remove_guest_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let guest = Guest::new("Meera Iyer", "9000000001", "Chennai", GuestStatus::NotSent);
    let id = guest.id.clone();
    store.add_guest(guest).unwrap();
    assert_eq!(store.guests().len(), 4);

    let patch = GuestPatch {
        status: Some(GuestStatus::Confirmed),
        rsvp: Some(true),
        ..GuestPatch::default()
    };
    store.update_guest(&id, patch).unwrap();

    let updated = store.guest(&id).unwrap();
    assert_eq!(updated.status, GuestStatus::Confirmed);
    assert!(updated.rsvp);
    // Fields absent from the patch are preserved.
    assert_eq!(updated.name, "Meera Iyer");
    assert_eq!(updated.city, "Chennai");

    store.remove_guest(&id).unwrap();
    assert!(store.guest(&id).is_none());
}

#[test]
fn update_with_empty_patch_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let before: Vec<Guest> = store.guests().to_vec();
    store.update_guest("1", GuestPatch::default()).unwrap();
    store.update_guest("1", GuestPatch::default()).unwrap();
    assert_eq!(store.guests(), before.as_slice());
}

#[test]
fn update_and_remove_on_absent_id_are_silent_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let before: Vec<Vendor> = store.vendors().to_vec();
    store
        .update_vendor("no-such-id", VendorPatch {
            paid: Some(999.0),
            ..VendorPatch::default()
        })
        .unwrap();
    store.remove_vendor("no-such-id").unwrap();
    assert_eq!(store.vendors(), before.as_slice());
}

#[test]
fn duplicate_ids_are_not_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let mut copycat = Guest::new("Copy", "0", "Nowhere", GuestStatus::Sent);
    copycat.id = "1".to_string();
    store.add_guest(copycat).unwrap();

    let matches = store
        .guests()
        .iter()
        .filter(|guest| guest.id == "1")
        .count();
    assert_eq!(matches, 2);
}

#[test]
fn patch_can_clear_optional_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let mut task = Task::new("Taste menus", EventCategory::Wedding, TaskPriority::Low);
    task.description = Some("Vegetarian options first".to_string());
    let task_id = task.id.clone();
    store.add_task(task).unwrap();

    store
        .update_task(&task_id, TaskPatch {
            deadline: Some(Some("2026-11-01".to_string())),
            ..TaskPatch::default()
        })
        .unwrap();
    let task = store.tasks().iter().find(|task| task.id == task_id).unwrap();
    assert_eq!(task.deadline.as_deref(), Some("2026-11-01"));

    // `Some(None)` clears; plain `None` would have left the field alone.
    store
        .update_task(&task_id, TaskPatch {
            description: Some(None),
            ..TaskPatch::default()
        })
        .unwrap();
    let task = store.tasks().iter().find(|task| task.id == task_id).unwrap();
    assert!(task.description.is_none());
    assert_eq!(task.deadline.as_deref(), Some("2026-11-01"));
}

#[test]
fn collections_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("planner.sqlite3");

    let task_id;
    {
        let conn = open_db(&db_path).unwrap();
        let mut store = fresh_store(&conn);

        let mut task = Task::new("Book mehendi artist", EventCategory::Mehendi, TaskPriority::High);
        task.description = Some("Shortlist three, compare rates".to_string());
        task_id = task.id.clone();
        store.add_task(task).unwrap();
        store
            .update_task(&task_id, TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            })
            .unwrap();

        let mut vendor = Vendor::new("Mehendi by Meena", "Mehendi", "9111111111", 40000.0, VendorStatus::Pending);
        vendor.paid = 10000.0;
        store.add_vendor(vendor).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = fresh_store(&conn);

    let task = store.tasks().iter().find(|task| task.id == task_id).unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.description.as_deref(), Some("Shortlist three, compare rates"));
    assert_eq!(store.vendors().len(), 3);
}
