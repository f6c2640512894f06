//! Items: things that exist in the world and may be carried.
//!
//! An [`Item`] holds the properties every item shares (volume, weight,
//! carry-ability) and one [`ItemKind`] facet with the data of its concrete
//! kind. Kinds compose rather than inherit: a weapon is an item whose facet
//! is a [`Weapon`].

use dunvale_foundation::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consumable::Consumable;
use crate::container::Container;
use crate::kind::EntityKind;
use crate::thing::{Entity, Thing, non_negative, required};
use crate::weapon::{Weapon, WeaponClass};

/// The kind-specific facet of an item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemKind {
    /// No extra behavior.
    Plain,
    /// Holds other items.
    Container(Container),
    /// Used to attack.
    Weapon(Weapon),
    /// Applies effects when used up.
    Consumable(Consumable),
}

/// An object in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    thing: Thing,
    fill_volume: f64,
    weight: f64,
    carry_able: bool,
    kind: ItemKind,
}

impl Item {
    /// Returns the space this item takes up inside a container.
    #[must_use]
    pub fn fill_volume(&self) -> f64 {
        self.fill_volume
    }

    /// Returns the item's own weight, excluding any contents.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the item's weight including everything it contains.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        match &self.kind {
            ItemKind::Container(container) => self.weight + container.current_weight(),
            _ => self.weight,
        }
    }

    /// Returns whether the item can be picked up; scenery cannot.
    #[must_use]
    pub fn carry_able(&self) -> bool {
        self.carry_able
    }

    /// Returns the kind-specific facet.
    #[must_use]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Returns the container facet, if this is a container.
    #[must_use]
    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            ItemKind::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Returns the container facet mutably, if this is a container.
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            ItemKind::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Returns the weapon facet, if this is a weapon.
    #[must_use]
    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// Returns the weapon facet mutably, if this is a weapon.
    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// Returns the consumable facet, if this is a consumable.
    #[must_use]
    pub fn as_consumable(&self) -> Option<&Consumable> {
        match &self.kind {
            ItemKind::Consumable(consumable) => Some(consumable),
            _ => None,
        }
    }

    /// Attacks a target `distance` away and returns the base damage dealt.
    ///
    /// # Errors
    ///
    /// Returns `NotAWeapon` if this item is not a weapon and `OutOfReach` if
    /// the target is beyond the weapon's reach.
    pub fn attack(&self, distance: f64) -> Result<f64> {
        let weapon = self
            .as_weapon()
            .ok_or_else(|| Error::new(ErrorKind::NotAWeapon(self.thing.name.clone())))?;
        if !weapon.in_reach(distance) {
            return Err(Error::new(ErrorKind::OutOfReach {
                weapon: self.thing.name.clone(),
                distance,
                reach: weapon.reach().unwrap_or(f64::INFINITY),
            }));
        }
        Ok(weapon.base_damage())
    }

    pub(crate) fn from_parts(base: ItemConfig, entity: &'static str, kind: ItemKind) -> Result<Self> {
        let thing = Thing::named(entity, base.name, base.description)?;
        let fill_volume = non_negative(
            entity,
            "fill_volume",
            required(entity, "fill_volume", base.fill_volume)?,
        )?;
        let weight = non_negative(entity, "weight", required(entity, "weight", base.weight)?)?;
        Ok(Self {
            thing,
            fill_volume,
            weight,
            carry_able: base.carry_able.unwrap_or(true),
            kind,
        })
    }
}

impl Entity for Item {
    fn thing(&self) -> &Thing {
        &self.thing
    }

    fn entity_kind(&self) -> EntityKind {
        match &self.kind {
            ItemKind::Plain => EntityKind::Item,
            ItemKind::Container(_) => EntityKind::Container,
            ItemKind::Consumable(_) => EntityKind::Consumable,
            ItemKind::Weapon(weapon) => match weapon.class() {
                WeaponClass::Basic => EntityKind::Weapon,
                WeaponClass::Melee { .. } => EntityKind::MeleeWeapon,
                WeaponClass::Ranged { .. } => EntityKind::RangedWeapon,
            },
        }
    }
}

/// Properties shared by every item configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ItemConfig {
    /// Display name (required).
    pub name: String,
    /// Description.
    pub description: String,
    /// Space taken inside a container (required).
    pub fill_volume: Option<f64>,
    /// Weight (required).
    pub weight: Option<f64>,
    /// Defaults to `true`.
    pub carry_able: Option<bool>,
}

impl ItemConfig {
    /// Starts a configuration with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the fill volume.
    #[must_use]
    pub fn with_fill_volume(mut self, fill_volume: f64) -> Self {
        self.fill_volume = Some(fill_volume);
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets whether the item can be carried.
    #[must_use]
    pub fn with_carry_able(mut self, carry_able: bool) -> Self {
        self.carry_able = Some(carry_able);
        self
    }

    /// Validates the configuration and builds a plain item.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank name or absent volume/weight, and
    /// `InvalidField` for a negative volume or weight.
    pub fn build(self) -> Result<Item> {
        Item::from_parts(self, "Item", ItemKind::Plain)
    }
}
