//! Integration tests for containers
//!
//! Tests capacity accounting and rejection.

use dunvale_entity::{
    ContainerConfig, Entity, Item, ItemConfig, MeleeWeaponConfig, WeaponConfig,
};
use dunvale_foundation::{Error, ErrorKind};

fn item(name: &str, volume: f64, weight: f64) -> Item {
    ItemConfig::new(name, "")
        .with_fill_volume(volume)
        .with_weight(weight)
        .build()
        .unwrap()
}

fn chest(capacity: f64, max_weight: f64) -> Item {
    ContainerConfig::new(ItemConfig::new("Chest", "").with_fill_volume(6.0).with_weight(5.0))
        .with_fill_capacity(capacity)
        .with_max_weight(max_weight)
        .build()
        .unwrap()
}

#[test]
fn rejection_leaves_container_unchanged() {
    let mut chest = chest(10.0, 100.0);
    let container = chest.as_container_mut().unwrap();
    container.add_item(item("Brick", 8.0, 4.0)).unwrap();

    let rejected = container.add_item(item("Log", 3.0, 2.0)).unwrap_err();
    assert_eq!(rejected.available, 2.0);
    assert_eq!(rejected.into_item().name(), "Log");
    assert_eq!(container.current_fill(), 8.0);
    assert_eq!(container.current_weight(), 4.0);
    assert_eq!(container.items().len(), 1);

    container.add_item(item("Pebble", 2.0, 0.5)).unwrap();
    assert_eq!(container.current_fill(), 10.0);
    assert_eq!(container.current_weight(), 4.5);
}

#[test]
fn rejection_converts_to_capacity_error() {
    let mut chest = chest(1.0, 10.0);
    let full = chest
        .as_container_mut()
        .unwrap()
        .add_item(item("Anvil", 5.0, 50.0))
        .unwrap_err();
    let err = Error::from(full);
    assert!(matches!(
        err.kind,
        ErrorKind::CapacityExceeded { ref item, required, available }
            if item == "Anvil" && required == 5.0 && available == 1.0
    ));
}

#[test]
fn nested_container_weight_counts_contents() {
    let mut pouch = ContainerConfig::new(ItemConfig::new("Pouch", "").with_fill_volume(1.0).with_weight(0.25))
        .with_fill_capacity(1.0)
        .with_max_weight(2.0)
        .build()
        .unwrap();
    pouch
        .as_container_mut()
        .unwrap()
        .add_item(item("Coin", 0.1, 0.5))
        .unwrap();
    assert_eq!(pouch.total_weight(), 0.75);

    let mut chest = chest(10.0, 100.0);
    chest.as_container_mut().unwrap().add_item(pouch).unwrap();
    assert_eq!(chest.as_container().unwrap().current_weight(), 0.75);
    assert_eq!(chest.total_weight(), 5.75);
}

#[test]
fn remove_and_empty_restore_capacity() {
    let mut chest = chest(10.0, 100.0);
    let container = chest.as_container_mut().unwrap();
    container.add_item(item("Cup", 1.0, 0.5)).unwrap();
    container.add_item(item("Plate", 2.0, 1.0)).unwrap();

    let cup = container.remove_item("Cup").unwrap();
    assert_eq!(cup.name(), "Cup");
    assert_eq!(container.remaining_capacity(), 8.0);

    let rest = container.empty();
    assert_eq!(rest.len(), 1);
    assert_eq!(container.current_fill(), 0.0);
    assert!(container.remove_item("Cup").is_err());
}

#[test]
fn overloaded_container_wears_weapons() {
    let mut sack = chest(20.0, 3.0);
    let sword = MeleeWeaponConfig::new(
        WeaponConfig::new(ItemConfig::new("Sword", "").with_fill_volume(3.0).with_weight(4.0))
            .with_base_damage(6.0),
    )
    .with_swing_radius(1.5)
    .build()
    .unwrap();

    let container = sack.as_container_mut().unwrap();
    container.add_item(sword).unwrap();
    assert!(container.is_overloaded());
    assert_eq!(container.overload(), 1.0);
    assert_eq!(container.wear_contents(10.0), 1);

    let sword = container.find("Sword").unwrap();
    assert_eq!(sword.as_weapon().unwrap().durability(), 90.0);
}
