//! Integration tests for built-in entity kinds
//!
//! Tests that every kind's table follows the inheritance merge rule.

use dunvale_entity::{EntityKind, builtin_registry};
use dunvale_foundation::resolve;

#[test]
fn every_kind_is_registered() {
    let registry = builtin_registry();
    assert_eq!(registry.len(), EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        assert!(registry.contains(kind.name()), "{kind} missing");
    }
}

#[test]
fn every_kind_satisfies_merge_rule() {
    for kind in EntityKind::ALL {
        let parents: Vec<_> = kind.parents().iter().map(|p| p.effective_actions()).collect();
        let own = dunvale_foundation::ActionTable::from_pairs(kind.own_actions());
        assert_eq!(&resolve(own, parents), kind.effective_actions(), "{kind}");
    }
}

#[test]
fn own_entries_win() {
    for kind in EntityKind::ALL {
        for (verb, handler) in kind.own_actions() {
            assert_eq!(kind.effective_actions().get(verb), Some(*handler), "{kind}.{verb}");
        }
    }
}

#[test]
fn tables_are_resolved_once() {
    let first = EntityKind::MeleeWeapon.effective_actions();
    let second = EntityKind::MeleeWeapon.effective_actions();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn inherited_verbs_reach_leaf_kinds() {
    let melee = EntityKind::MeleeWeapon.effective_actions();
    assert_eq!(melee.get("attack"), Some("swing"));
    assert_eq!(melee.get("wield"), Some("equip"));
    assert_eq!(melee.get("take"), Some("pick_up"));
    assert_eq!(melee.get("look"), Some("describe"));

    let rat = EntityKind::NonSentientCreature.effective_actions();
    assert_eq!(rat, EntityKind::Creature.effective_actions());
}

#[test]
fn is_a_follows_parents() {
    assert!(EntityKind::RangedWeapon.is_a(EntityKind::Item));
    assert!(EntityKind::SentientCreature.is_a(EntityKind::Thing));
    assert!(!EntityKind::Room.is_a(EntityKind::Item));
}
