//! Integration tests for creatures
//!
//! Tests kinds, defaults, carrying, and consuming.

use dunvale_entity::{
    ConsumableConfig, CreatureConfig, CreatureKind, EffectConfig, Entity, EntityKind, ItemConfig,
    ItemDef, NonSentientCreatureConfig, Race, SentientCreatureConfig, Species,
};
use dunvale_foundation::ErrorKind;

fn adventurer() -> CreatureConfig {
    CreatureConfig::new("Aldric", "A tired knight.").with_max_health(40.0)
}

#[test]
fn kinds_and_defaults() {
    let plain = adventurer().build().unwrap();
    assert_eq!(plain.kind(), CreatureKind::Plain);
    assert!(!plain.is_hostile());

    let elf = SentientCreatureConfig::new(adventurer()).with_race(Race::Elf).build().unwrap();
    assert_eq!(elf.entity_kind(), EntityKind::SentientCreature);
    assert_eq!(elf.race(), Some(Race::Elf));
    assert!(!elf.is_hostile());

    let wolf = NonSentientCreatureConfig::new(adventurer())
        .with_species(Species::Wolf)
        .with_hostile(false)
        .build()
        .unwrap();
    assert_eq!(wolf.species(), Some(Species::Wolf));
    assert!(!wolf.is_hostile());
}

#[test]
fn carried_weight_sums_items() {
    let mut knight = adventurer()
        .with_item(ItemDef::Item(ItemConfig::new("Helm", "").with_fill_volume(2.0).with_weight(3.0)))
        .build()
        .unwrap();
    knight.add_item(ItemConfig::new("Boots", "").with_fill_volume(2.0).with_weight(2.5).build().unwrap());
    assert_eq!(knight.carried_weight(), 5.5);
    assert!(knight.find_item("Boots").is_some());
}

#[test]
fn consuming_applies_lingering_effects() {
    let mut knight = adventurer().build().unwrap();
    knight.add_item(
        ConsumableConfig::new(ItemConfig::new("Ale", "").with_fill_volume(1.0).with_weight(1.0))
            .with_effect(
                EffectConfig::new("Tipsy", "", "drunk")
                    .lingering_for(10)
                    .with_stat("Wisdom", -1.0),
            )
            .build()
            .unwrap(),
    );

    knight.consume("Ale").unwrap();
    assert!(knight.items().is_empty());
    assert_eq!(knight.active_effects()[0].effect_type, "drunk");
    assert_eq!(knight.stat_modifiers().get("Wisdom"), Some(&-1.0));
}

#[test]
fn consuming_missing_or_inedible_fails() {
    let mut knight = adventurer()
        .with_item(ItemDef::Item(ItemConfig::new("Stone", "").with_fill_volume(1.0).with_weight(1.0)))
        .build()
        .unwrap();
    assert!(matches!(knight.consume("Stone").unwrap_err().kind, ErrorKind::NotConsumable(_)));
    assert!(matches!(knight.consume("Bread").unwrap_err().kind, ErrorKind::ItemNotFound(_)));
    assert_eq!(knight.items().len(), 1);
}

#[test]
fn health_is_required_and_positive() {
    let err = CreatureConfig::new("Wisp", "").build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField { field: "max_health", .. }));
    let err = CreatureConfig::new("Wisp", "").with_max_health(-3.0).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidField { field: "max_health", .. }));
}
