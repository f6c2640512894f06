//! Integration tests for the room directory
//!
//! Tests lookup, move, swap, and removal semantics.

use dunvale_entity::Entity;
use dunvale_foundation::Location;
use dunvale_world::{Room, RoomDirectory, RoomHandle};

fn room(name: &str, loc: &Location) -> RoomHandle {
    RoomHandle::new(Room::new(name, "", loc.clone()).unwrap())
}

#[test]
fn get_after_set_is_same_room() {
    let mut dir = RoomDirectory::new();
    let loc = Location::new(0, 0, 0);
    let hall = room("Hall", &loc);
    dir.set_room(&loc, hall.clone());

    let found = dir.get_room(&loc).unwrap();
    assert!(found.ptr_eq(&hall));
    // Equal coordinates from a separate Location resolve the same key
    let again: Location = "(0, 0, 0)".parse().unwrap();
    assert!(dir.get_room(&again).unwrap().ptr_eq(&hall));
}

#[test]
fn lookup_miss_is_none() {
    let dir = RoomDirectory::new();
    assert!(dir.get_room(&Location::new(7, 7, 7)).is_none());
    assert!(!dir.room_exists(&Location::new(7, 7, 7)));
}

#[test]
fn move_from_empty_changes_nothing() {
    let mut dir = RoomDirectory::new();
    let (a, b) = (Location::new(0, 0, 0), Location::new(0, 0, 1));
    let at_b = room("Attic", &b);
    dir.set_room(&b, at_b.clone());

    assert!(!dir.move_room(&a, &b));
    assert!(dir.get_room(&a).is_none());
    assert!(dir.get_room(&b).unwrap().ptr_eq(&at_b));
}

#[test]
fn move_keeps_handle_but_not_room_location() {
    let mut dir = RoomDirectory::new();
    let (a, b) = (Location::new(0, 0, 0), Location::new(5, 0, 0));
    let hall = room("Hall", &a);
    dir.set_room(&a, hall.clone());

    assert!(dir.move_room(&a, &b));
    let moved = dir.get_room(&b).unwrap();
    assert!(moved.ptr_eq(&hall));
    assert_eq!(moved.read().location(), &a);
}

#[test]
fn swap_twice_restores() {
    let mut dir = RoomDirectory::new();
    let (a, b) = (Location::new(1, 0, 0), Location::in_map_set("caves", 1, 0, 0));
    let (ra, rb) = (room("Meadow", &a), room("Grotto", &b));
    dir.set_room(&a, ra.clone());
    dir.set_room(&b, rb.clone());

    assert!(dir.swap_rooms(&a, &b));
    assert_eq!(dir.get_room(&a).unwrap().read().name(), "Grotto");
    assert_eq!(dir.get_room(&b).unwrap().read().name(), "Meadow");

    assert!(dir.swap_rooms(&b, &a));
    assert!(dir.get_room(&a).unwrap().ptr_eq(&ra));
    assert!(dir.get_room(&b).unwrap().ptr_eq(&rb));
}

#[test]
fn swap_with_empty_side_fails() {
    let mut dir = RoomDirectory::new();
    let a = Location::new(0, 0, 0);
    dir.set_room(&a, room("Hall", &a));
    assert!(!dir.swap_rooms(&a, &Location::new(1, 1, 1)));
    assert_eq!(dir.len(), 1);
}

#[test]
fn remove_absent_is_noop() {
    let mut dir = RoomDirectory::new();
    let a = Location::new(0, 0, 0);
    dir.set_room(&a, room("Hall", &a));
    assert!(dir.remove_room(&Location::new(0, 0, 1)).is_none());
    assert_eq!(dir.len(), 1);
}

#[test]
fn directory_does_not_own_rooms() {
    let mut dir = RoomDirectory::new();
    let a = Location::new(0, 0, 0);
    let hall = room("Hall", &a);
    dir.set_room(&a, hall.clone());
    dir.remove_room(&a);
    // The caller's handle still works
    assert_eq!(hall.read().name(), "Hall");
}
