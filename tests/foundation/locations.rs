//! Integration tests for Location
//!
//! Tests parsing, in-place updates, map sets, and keys.

use dunvale_foundation::{DEFAULT_MAP_SET, ErrorKind, Location, LocationKey};

#[test]
fn set_location_accepts_signed_coordinates() {
    let mut loc = Location::default();
    loc.set_location("(3, -2, 7)").unwrap();
    assert_eq!((loc.x(), loc.y(), loc.z()), (3, -2, 7));
}

#[test]
fn set_location_failure_keeps_previous_values() {
    let mut loc = Location::new(4, 5, 6);
    let err = loc.set_location("(1,2)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LocationParse { .. }));
    assert_eq!((loc.x(), loc.y(), loc.z()), (4, 5, 6));

    assert!(loc.set_location("(1, two, 3)").is_err());
    assert_eq!((loc.x(), loc.y(), loc.z()), (4, 5, 6));
}

#[test]
fn set_location_keeps_map_set() {
    let mut loc = Location::in_map_set("caves", 0, 0, 0);
    loc.set_location("(1, 1, 1)").unwrap();
    assert_eq!(loc.map_set(), "caves");
}

#[test]
fn parse_without_parentheses() {
    let loc: Location = " 10 , 20 , 30 ".parse().unwrap();
    assert_eq!(loc, Location::new(10, 20, 30));
    assert_eq!(loc.map_set(), DEFAULT_MAP_SET);
}

#[test]
fn parse_ignores_extra_components() {
    let loc = Location::parse("(1, 2, 3, 4)").unwrap();
    assert_eq!(loc, Location::new(1, 2, 3));
}

#[test]
fn key_includes_map_set() {
    let a = Location::parse_in("north", "(0,0,0)").unwrap();
    let b = Location::parse_in("south", "(0,0,0)").unwrap();
    assert_ne!(a.key(), b.key());
    assert_eq!(
        LocationKey::from(&a),
        LocationKey {
            map_set: "north".to_string(),
            x: 0,
            y: 0,
            z: 0
        }
    );
}

#[test]
fn distance_only_within_map_set() {
    let a = Location::new(0, 0, 0);
    assert_eq!(a.distance_to(&Location::new(3, 4, 0)), Some(5.0));
    assert_eq!(a.distance_to(&Location::in_map_set("elsewhere", 3, 4, 0)), None);
}

#[test]
fn display_round_trips_through_parse_in() {
    let loc = Location::in_map_set("caves", -1, 2, -3);
    assert_eq!(loc.to_string(), "caves(-1, 2, -3)");
    let coords = loc.to_string().trim_start_matches("caves").to_string();
    assert_eq!(Location::parse_in("caves", &coords).unwrap(), loc);
}
