//! Tagged definitions for items and creatures.
//!
//! A definition names the concrete kind alongside its configuration, so a
//! whole world can be described as data and built in one pass.
//!
//! With the `serde` feature the tag is a `"type"` field:
//!
//! ```json
//! { "type": "MeleeWeapon", "name": "Rusty Sword", "fill_volume": 3,
//!   "weight": 4, "base_damage": 5, "swing_radius": 1.5 }
//! ```

use dunvale_foundation::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consumable::ConsumableConfig;
use crate::container::ContainerConfig;
use crate::creature::{
    Creature, CreatureConfig, NonSentientCreatureConfig, SentientCreatureConfig,
};
use crate::item::{Item, ItemConfig};
use crate::weapon::{MeleeWeaponConfig, RangedWeaponConfig, WeaponConfig};

/// Definition of any item kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum ItemDef {
    /// A plain item.
    Item(ItemConfig),
    /// A container.
    Container(ContainerConfig),
    /// A basic weapon.
    Weapon(WeaponConfig),
    /// A melee weapon.
    MeleeWeapon(MeleeWeaponConfig),
    /// A ranged weapon.
    RangedWeapon(RangedWeaponConfig),
    /// A consumable.
    Consumable(ConsumableConfig),
}

impl ItemDef {
    /// Returns the name the definition will produce.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Item(c) => &c.name,
            Self::Container(c) => &c.item.name,
            Self::Weapon(c) => &c.item.name,
            Self::MeleeWeapon(c) => &c.weapon.item.name,
            Self::RangedWeapon(c) => &c.weapon.item.name,
            Self::Consumable(c) => &c.item.name,
        }
    }

    /// Builds the item.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, with the item's name
    /// pushed onto the error context.
    pub fn build(self) -> Result<Item> {
        let frame = format!("item {}", self.name());
        let built = match self {
            Self::Item(c) => c.build(),
            Self::Container(c) => c.build(),
            Self::Weapon(c) => c.build(),
            Self::MeleeWeapon(c) => c.build(),
            Self::RangedWeapon(c) => c.build(),
            Self::Consumable(c) => c.build(),
        };
        built.map_err(|e| e.in_frame(frame))
    }
}

/// Definition of any creature kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum CreatureDef {
    /// A plain creature.
    Creature(CreatureConfig),
    /// A sentient creature.
    SentientCreature(SentientCreatureConfig),
    /// A non-sentient creature.
    NonSentientCreature(NonSentientCreatureConfig),
}

impl CreatureDef {
    /// Returns the name the definition will produce.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Creature(c) => &c.name,
            Self::SentientCreature(c) => &c.creature.name,
            Self::NonSentientCreature(c) => &c.creature.name,
        }
    }

    /// Builds the creature.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, with the creature's
    /// name pushed onto the error context.
    pub fn build(self) -> Result<Creature> {
        let frame = format!("creature {}", self.name());
        let built = match self {
            Self::Creature(c) => c.build(),
            Self::SentientCreature(c) => c.build(),
            Self::NonSentientCreature(c) => c.build(),
        };
        built.map_err(|e| e.in_frame(frame))
    }
}
