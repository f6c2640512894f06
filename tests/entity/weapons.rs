//! Integration tests for weapons
//!
//! Tests reach, requirements, durability, and construction errors.

use std::collections::BTreeMap;

use dunvale_entity::{
    DEFAULT_EFFECTIVE_RANGE, EffectConfig, Entity, ItemConfig, MeleeWeaponConfig,
    RangedWeaponConfig, WeaponConfig,
};
use dunvale_foundation::ErrorKind;

fn base(name: &str) -> WeaponConfig {
    WeaponConfig::new(ItemConfig::new(name, "").with_fill_volume(3.0).with_weight(2.0))
        .with_base_damage(7.0)
}

#[test]
fn melee_reach_is_swing_radius() {
    let axe = MeleeWeaponConfig::new(base("Axe")).with_swing_radius(2.0).build().unwrap();
    assert_eq!(axe.attack(2.0).unwrap(), 7.0);
    let err = axe.attack(2.5).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfReach { reach, .. } if reach == 2.0));
}

#[test]
fn ranged_reach_defaults() {
    let bow = RangedWeaponConfig::new(base("Bow")).build().unwrap();
    let weapon = bow.as_weapon().unwrap();
    assert_eq!(weapon.reach(), Some(DEFAULT_EFFECTIVE_RANGE));
    assert!(bow.attack(DEFAULT_EFFECTIVE_RANGE).is_ok());
    assert!(bow.attack(DEFAULT_EFFECTIVE_RANGE + 0.1).is_err());
    assert_eq!(bow.handler_for("aim"), Some("take_aim"));
}

#[test]
fn basic_weapon_has_no_reach_limit() {
    let rock = base("Rock").build().unwrap();
    assert!(rock.attack(1_000.0).is_ok());
    assert!(rock.attack(-1.0).is_err());
}

#[test]
fn plain_item_cannot_attack() {
    let spoon = ItemConfig::new("Spoon", "").with_fill_volume(0.1).with_weight(0.1).build().unwrap();
    assert!(matches!(spoon.attack(0.0).unwrap_err().kind, ErrorKind::NotAWeapon(_)));
}

#[test]
fn requirements_checked_by_stat() {
    let hammer = MeleeWeaponConfig::new(
        base("Warhammer")
            .with_required_stat("Strength", 9)
            .with_required_stat("Wisdom", 2),
    )
    .with_swing_radius(1.0)
    .build()
    .unwrap();
    let weapon = hammer.as_weapon().unwrap();

    let mut stats = BTreeMap::from([("Strength".to_string(), 10), ("Wisdom".to_string(), 1)]);
    let err = weapon.meets_requirements(&stats).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::RequirementNotMet { ref stat, required: 2, actual: 1 } if stat == "Wisdom"
    ));

    stats.insert("Wisdom".to_string(), 2);
    assert!(weapon.meets_requirements(&stats).is_ok());
}

#[test]
fn durability_wears_and_repairs_within_bounds() {
    let mut blade = MeleeWeaponConfig::new(base("Blade").with_durability(15.0))
        .with_swing_radius(1.0)
        .build()
        .unwrap();
    let weapon = blade.as_weapon_mut().unwrap();
    weapon.wear(20.0);
    assert_eq!(weapon.durability(), 0.0);
    assert!(weapon.is_broken());
    weapon.repair(250.0);
    assert_eq!(weapon.durability(), 100.0);
}

#[test]
fn on_hit_effects_are_built() {
    let dagger = MeleeWeaponConfig::new(
        base("Venom Dagger").with_effect(
            EffectConfig::new("Poison", "Burns.", "poison")
                .lingering_for(3)
                .with_damage(1.0),
        ),
    )
    .with_swing_radius(0.5)
    .build()
    .unwrap();
    let effect = &dagger.as_weapon().unwrap().effects()[0];
    assert!(effect.lingering);
    assert_eq!(effect.linger_time, Some(3));
}

#[test]
fn construction_errors_name_field() {
    let err = WeaponConfig::new(ItemConfig::new("Stick", "").with_fill_volume(1.0).with_weight(1.0))
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField { entity: "Weapon", field: "base_damage" }));

    let err = base("Glass Sword").with_durability(101.0).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidField { field: "durability", .. }));

    let err = RangedWeaponConfig::new(base("Sling"))
        .with_effective_range(0.0)
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidField { field: "effective_range", .. }));
}
