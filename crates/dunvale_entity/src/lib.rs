//! Entities of the Dunvale world model.
//!
//! Every entity is a [`Thing`] with a name and a description. Items add
//! volume and weight, and carry one kind-specific facet:
//!
//! - [`Container`] - holds other items up to a fill capacity
//! - [`Weapon`] - deals damage; melee and ranged weapons add a reach
//! - [`Consumable`] - applies [`Effect`]s when used up
//!
//! [`Creature`]s carry items and active effects, and come in sentient and
//! non-sentient flavors.
//!
//! Each kind answers verbs through an [`ActionTable`](dunvale_foundation::ActionTable)
//! inherited from its parent kinds; see [`EntityKind`].
//!
//! Entities are constructed from configuration structs that validate on
//! `build()`. [`ItemDef`] and [`CreatureDef`] tag a configuration with its
//! kind so worlds can be described as data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod consumable;
pub mod container;
pub mod creature;
pub mod definition;
pub mod effect;
pub mod item;
pub mod kind;
pub mod thing;
pub mod weapon;

pub use consumable::{Consumable, ConsumableConfig};
pub use container::{Container, ContainerConfig, ContainerFull};
pub use creature::{
    Creature, CreatureConfig, CreatureKind, NonSentientCreatureConfig, Race,
    SentientCreatureConfig, Species,
};
pub use definition::{CreatureDef, ItemDef};
pub use effect::{Effect, EffectConfig};
pub use item::{Item, ItemConfig, ItemKind};
pub use kind::{EntityKind, builtin_registry};
pub use thing::{Entity, Thing};
pub use weapon::{
    DEFAULT_EFFECTIVE_RANGE, FULL_DURABILITY, MeleeWeaponConfig, RangedWeaponConfig, Weapon,
    WeaponClass, WeaponConfig,
};
