//! Integration tests for action table resolution
//!
//! Tests the merge rule: own entries win, earlier parents win ties.

use dunvale_foundation::{ActionRegistry, ActionTable, ErrorKind, resolve};

fn thing_table() -> ActionTable {
    ActionTable::from_pairs(&[("look", "describe"), ("do", "thing_do")])
}

// =============================================================================
// resolve()
// =============================================================================

#[test]
fn own_entry_overrides_parent() {
    let own = ActionTable::from_pairs(&[("do", "item_do"), ("new", "item_new")]);
    let resolved = resolve(own, [&thing_table()]);

    assert_eq!(resolved.get("do"), Some("item_do"));
    assert_eq!(resolved.get("new"), Some("item_new"));
    assert_eq!(resolved.get("look"), Some("describe"));
    assert_eq!(resolved.len(), 3);
}

#[test]
fn subtype_without_own_actions_inherits_union() {
    let left = ActionTable::from_pairs(&[("a", "left_a"), ("shared", "left")]);
    let right = ActionTable::from_pairs(&[("b", "right_b"), ("shared", "right")]);
    let resolved = resolve(ActionTable::new(), [&left, &right]);

    assert_eq!(resolved.get("a"), Some("left_a"));
    assert_eq!(resolved.get("b"), Some("right_b"));
    // Earlier parent wins
    assert_eq!(resolved.get("shared"), Some("left"));
}

#[test]
fn resolve_with_no_ancestors_is_own_table() {
    let own = thing_table();
    assert_eq!(resolve(own.clone(), Vec::<&ActionTable>::new()), own);
}

// =============================================================================
// ActionRegistry
// =============================================================================

#[test]
fn registry_resolves_through_chain() {
    let mut registry = ActionRegistry::new();
    registry.register("Thing", &[], thing_table()).unwrap();
    registry
        .register("Item", &["Thing"], ActionTable::from_pairs(&[("take", "pick_up")]))
        .unwrap();
    registry
        .register("Weapon", &["Item"], ActionTable::from_pairs(&[("do", "strike")]))
        .unwrap();

    let weapon = registry.resolved("Weapon").unwrap();
    assert_eq!(weapon.get("look"), Some("describe"));
    assert_eq!(weapon.get("take"), Some("pick_up"));
    assert_eq!(weapon.get("do"), Some("strike"));
    assert_eq!(registry.own("Weapon").unwrap().len(), 1);
    assert_eq!(registry.parents("Weapon").unwrap(), ["Item".to_string()]);
}

#[test]
fn registry_rejects_unknown_parent() {
    let mut registry = ActionRegistry::new();
    let err = registry
        .register("Orphan", &["Nobody"], ActionTable::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(ref name) if name == "Nobody"));
    assert!(!registry.contains("Orphan"));
}

#[test]
fn registry_rejects_duplicate() {
    let mut registry = ActionRegistry::new();
    registry.register("Thing", &[], thing_table()).unwrap();
    let err = registry.register("Thing", &[], ActionTable::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateType(_)));
    // First registration is untouched
    assert_eq!(registry.resolved("Thing").unwrap().len(), 2);
}

#[test]
fn register_returns_resolved_table() {
    let mut registry = ActionRegistry::new();
    registry.register("Thing", &[], thing_table()).unwrap();
    let before = registry
        .register("Item", &["Thing"], ActionTable::new())
        .unwrap()
        .clone();
    assert_eq!(&before, registry.resolved("Item").unwrap());
}
