//! Built-in entity kinds and their action tables.
//!
//! Each kind declares its immediate parents and the verbs it handles itself.
//! The first call to [`EntityKind::effective_actions`] registers every kind
//! with an [`ActionRegistry`], parents first, and caches the resolved tables
//! for the rest of the process.

use std::fmt;

use dunvale_foundation::{ActionRegistry, ActionTable};
use lazy_static::lazy_static;

/// The concrete type of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Anything with a name and description.
    Thing,
    /// An object that can exist in the world and may be carried.
    Item,
    /// A change applied to a creature.
    Effect,
    /// An item that applies effects when used up.
    Consumable,
    /// An item that holds other items.
    Container,
    /// An item used to attack.
    Weapon,
    /// A weapon limited by swing radius.
    MeleeWeapon,
    /// A weapon limited by effective range.
    RangedWeapon,
    /// A living thing with health.
    Creature,
    /// A creature that can talk.
    SentientCreature,
    /// A creature that cannot talk.
    NonSentientCreature,
    /// A place bound to a location.
    Room,
}

impl EntityKind {
    /// Every kind, each listed after its parents.
    pub const ALL: [EntityKind; 12] = [
        Self::Thing,
        Self::Item,
        Self::Effect,
        Self::Consumable,
        Self::Container,
        Self::Weapon,
        Self::MeleeWeapon,
        Self::RangedWeapon,
        Self::Creature,
        Self::SentientCreature,
        Self::NonSentientCreature,
        Self::Room,
    ];

    /// Returns the type name used for registration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thing => "Thing",
            Self::Item => "Item",
            Self::Effect => "Effect",
            Self::Consumable => "Consumable",
            Self::Container => "Container",
            Self::Weapon => "Weapon",
            Self::MeleeWeapon => "MeleeWeapon",
            Self::RangedWeapon => "RangedWeapon",
            Self::Creature => "Creature",
            Self::SentientCreature => "SentientCreature",
            Self::NonSentientCreature => "NonSentientCreature",
            Self::Room => "Room",
        }
    }

    /// Returns the immediate parents in declaration order.
    #[must_use]
    pub const fn parents(self) -> &'static [EntityKind] {
        match self {
            Self::Thing => &[],
            Self::Item | Self::Effect | Self::Creature | Self::Room => &[Self::Thing],
            Self::Consumable | Self::Container | Self::Weapon => &[Self::Item],
            Self::MeleeWeapon | Self::RangedWeapon => &[Self::Weapon],
            Self::SentientCreature | Self::NonSentientCreature => &[Self::Creature],
        }
    }

    /// Returns the verbs this kind declares for itself.
    #[must_use]
    pub const fn own_actions(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Thing => &[("look", "describe"), ("examine", "describe")],
            Self::Item => &[
                ("take", "pick_up"),
                ("drop", "put_down"),
                ("examine", "inspect_item"),
            ],
            Self::Effect | Self::NonSentientCreature => &[],
            Self::Consumable => &[("eat", "consume"), ("drink", "consume")],
            Self::Container => &[
                ("open", "open_container"),
                ("close", "close_container"),
                ("put", "insert_item"),
                ("empty", "empty_container"),
            ],
            Self::Weapon => &[("wield", "equip"), ("attack", "strike")],
            Self::MeleeWeapon => &[("attack", "swing")],
            Self::RangedWeapon => &[("attack", "shoot"), ("aim", "take_aim")],
            Self::Creature => &[("attack", "fight"), ("examine", "inspect_creature")],
            Self::SentientCreature => &[("talk", "converse"), ("trade", "barter")],
            Self::Room => &[("enter", "enter_room"), ("look", "describe_room")],
        }
    }

    /// Returns the resolved action table for this kind.
    #[must_use]
    pub fn effective_actions(self) -> &'static ActionTable {
        &builtins().tables[self as usize]
    }

    /// Returns true if this kind is `other` or descends from it.
    #[must_use]
    pub fn is_a(self, other: EntityKind) -> bool {
        self == other || self.parents().iter().any(|p| p.is_a(other))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct Builtins {
    registry: ActionRegistry,
    tables: Vec<ActionTable>,
}

lazy_static! {
    static ref BUILTINS: Builtins = register_builtins();
}

fn register_builtins() -> Builtins {
    let mut registry = ActionRegistry::new();
    let mut tables = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        let parents: Vec<&str> = kind.parents().iter().map(|p| p.name()).collect();
        let resolved = registry
            .register(kind.name(), &parents, ActionTable::from_pairs(kind.own_actions()))
            .expect("built-in kinds are listed after their parents");
        tables.push(resolved.clone());
    }
    tracing::debug!(kinds = tables.len(), "registered built-in action tables");
    Builtins { registry, tables }
}

fn builtins() -> &'static Builtins {
    &BUILTINS
}

/// Returns the registry holding every built-in kind.
///
/// # Panics
///
/// Panics on first use if the built-in declarations are inconsistent
/// (a kind listed before one of its parents).
#[must_use]
pub fn builtin_registry() -> &'static ActionRegistry {
    &builtins().registry
}
