use vivaha_core::db::open_db_in_memory;
use vivaha_core::{
    RoomDraft, RoomOccupancy, RoomStatus, RoomType, SavedHotel, SqliteSlotRepository, StoreError,
    WeddingStore,
};

fn fresh_store(conn: &rusqlite::Connection) -> WeddingStore<SqliteSlotRepository<'_>> {
    let repo = SqliteSlotRepository::try_new(conn).unwrap();
    WeddingStore::load(repo).unwrap()
}

#[test]
fn draft_toggle_adds_and_removes_guests() {
    let mut draft = RoomDraft::new("201", RoomType::Suite, 4);

    draft.toggle_guest("1").unwrap();
    draft.toggle_guest("2").unwrap();
    assert_eq!(draft.guest_ids, vec!["1", "2"]);

    draft.toggle_guest("1").unwrap();
    assert_eq!(draft.guest_ids, vec!["2"]);
}

#[test]
fn draft_at_capacity_rejects_additions_and_stays_unchanged() {
    let mut draft = RoomDraft::new("201", RoomType::Double, 2);
    draft.toggle_guest("1").unwrap();
    draft.toggle_guest("2").unwrap();

    let err = draft.toggle_guest("3").unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { capacity: 2, .. }));
    assert_eq!(draft.guest_ids, vec!["1", "2"]);

    // Removal still works at capacity.
    draft.toggle_guest("2").unwrap();
    assert_eq!(draft.guest_ids, vec!["1"]);
}

#[test]
fn capacity_is_checked_against_the_draft_not_the_saved_room() {
    let conn = open_db_in_memory().unwrap();
    let store = fresh_store(&conn);

    // Seed room 104 holds one guest at most; raising capacity in the draft
    // allows a second guest before anything is saved.
    let mut draft = RoomDraft::from_room(store.room("104").unwrap());
    draft.capacity = 2;
    draft.toggle_guest("1").unwrap();
    draft.toggle_guest("2").unwrap();
    assert_eq!(draft.guest_ids.len(), 2);
}

#[test]
fn saving_a_draft_reconciles_guest_back_references() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    // Move guest "3" into room 102 and drop nobody.
    let mut draft = RoomDraft::from_room(store.room("102").unwrap());
    draft.toggle_guest("3").unwrap();
    draft.status = RoomStatus::Occupied;
    store.save_room_draft("102", &draft).unwrap();

    assert_eq!(store.room("102").unwrap().guest_ids, vec!["3"]);
    assert_eq!(store.room("102").unwrap().status, RoomStatus::Occupied);
    assert_eq!(store.guest("3").unwrap().assigned_room_id.as_deref(), Some("102"));

    // Now remove "3" again; the back-reference is cleared.
    let mut draft = RoomDraft::from_room(store.room("102").unwrap());
    draft.toggle_guest("3").unwrap();
    store.save_room_draft("102", &draft).unwrap();

    assert!(store.room("102").unwrap().guest_ids.is_empty());
    assert!(store.guest("3").unwrap().assigned_room_id.is_none());
}

#[test]
fn saving_a_draft_moves_a_guest_lodged_elsewhere() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    // Seed room 101 already lists guest "1"; adding them to 102 must move
    // them, not lodge them in two rooms at once.
    let mut draft = RoomDraft::from_room(store.room("102").unwrap());
    draft.toggle_guest("1").unwrap();
    store.save_room_draft("102", &draft).unwrap();

    assert_eq!(store.room("101").unwrap().guest_ids, vec!["2"]);
    assert_eq!(store.room("102").unwrap().guest_ids, vec!["1"]);
    assert_eq!(store.guest("1").unwrap().assigned_room_id.as_deref(), Some("102"));
}

#[test]
fn removing_a_guest_frees_their_bed() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.remove_guest("1").unwrap();
    assert_eq!(store.room("101").unwrap().guest_ids, vec!["2"]);
    drop(store);

    // The released membership was persisted, not just dropped in memory.
    let reloaded = fresh_store(&conn);
    assert_eq!(reloaded.room("101").unwrap().guest_ids, vec!["2"]);
}

#[test]
fn saving_an_overfull_draft_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let mut draft = RoomDraft::from_room(store.room("102").unwrap());
    draft.guest_ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];

    let err = store.save_room_draft("102", &draft).unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { .. }));
    assert!(store.room("102").unwrap().guest_ids.is_empty());
}

#[test]
fn adding_a_room_from_a_draft_assigns_guests() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let mut draft = RoomDraft::new("301", RoomType::Family, 4);
    draft.status = RoomStatus::Reserved;
    draft.toggle_guest("3").unwrap();

    let room_id = store.add_room_from_draft(&draft).unwrap();
    let room = store.room(&room_id).unwrap();
    assert_eq!(room.room_number, "301");
    assert_eq!(room.kind, RoomType::Family);
    assert_eq!(room.guest_ids, vec!["3"]);
    assert_eq!(
        store.guest("3").unwrap().assigned_room_id.as_deref(),
        Some(room_id.as_str())
    );
}

#[test]
fn removing_a_room_clears_guest_back_references() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let mut draft = RoomDraft::from_room(store.room("102").unwrap());
    draft.toggle_guest("3").unwrap();
    store.save_room_draft("102", &draft).unwrap();

    store.remove_room("102").unwrap();
    assert!(store.room("102").is_none());
    assert!(store.guest("3").unwrap().assigned_room_id.is_none());
}

#[test]
fn marking_email_sent_stamps_the_room() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    store.mark_room_email_sent("101", 1_724_400_000_000).unwrap();
    assert_eq!(store.room("101").unwrap().email_sent_at, Some(1_724_400_000_000));

    let err = store.mark_room_email_sent("ghost", 0).unwrap_err();
    assert!(matches!(err, StoreError::RoomNotFound(_)));
}

#[test]
fn occupancy_counts_match_the_seed_rooms() {
    let conn = open_db_in_memory().unwrap();
    let store = fresh_store(&conn);

    let occupancy = RoomOccupancy::compute(store.rooms());
    assert_eq!(occupancy.total, 4);
    assert_eq!(occupancy.occupied, 1);
    assert_eq!(occupancy.available, 2);
}

#[test]
fn saved_hotels_are_persisted() {
    let conn = open_db_in_memory().unwrap();
    let mut store = fresh_store(&conn);

    let hotel = SavedHotel::new("The Leela", "https://maps.example/leela");
    let hotel_id = hotel.id.clone();
    store.add_saved_hotel(hotel).unwrap();
    drop(store);

    let reloaded = fresh_store(&conn);
    assert_eq!(reloaded.saved_hotels().len(), 1);
    assert_eq!(reloaded.saved_hotels()[0].name, "The Leela");

    let mut reloaded = reloaded;
    reloaded.remove_saved_hotel(&hotel_id).unwrap();
    assert!(reloaded.saved_hotels().is_empty());
}
