//! Weapons and their reach rules.
//!
//! A melee weapon cannot hit past its swing radius and a ranged weapon cannot
//! hit past its effective range; either attack fails outright rather than
//! rolling for it. A basic weapon has no reach limit.

use std::collections::BTreeMap;

use dunvale_foundation::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effect::{Effect, EffectConfig};
use crate::item::{Item, ItemConfig, ItemKind};
use crate::thing::{non_negative, positive, required};

/// Durability of a new weapon, as a percentage.
pub const FULL_DURABILITY: f64 = 100.0;

/// Effective range of a ranged weapon when none is given.
pub const DEFAULT_EFFECTIVE_RANGE: f64 = 25.0;

/// How a weapon reaches its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeaponClass {
    /// No reach limit.
    Basic,
    /// Swords, daggers, maces.
    Melee {
        /// Farthest distance a swing connects.
        swing_radius: f64,
    },
    /// Bows, thrown weapons.
    Ranged {
        /// Farthest distance a shot connects.
        effective_range: f64,
    },
}

impl WeaponClass {
    /// Returns the maximum distance an attack can reach, if limited.
    #[must_use]
    pub fn reach(self) -> Option<f64> {
        match self {
            Self::Basic => None,
            Self::Melee { swing_radius } => Some(swing_radius),
            Self::Ranged { effective_range } => Some(effective_range),
        }
    }
}

/// The weapon facet of an [`Item`].
#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    base_damage: f64,
    durability: f64,
    required_stats: BTreeMap<String, u32>,
    effects: Vec<Effect>,
    class: WeaponClass,
}

impl Weapon {
    /// Returns the damage dealt by a successful attack.
    #[must_use]
    pub fn base_damage(&self) -> f64 {
        self.base_damage
    }

    /// Returns the remaining durability, from 0 to 100.
    #[must_use]
    pub fn durability(&self) -> f64 {
        self.durability
    }

    /// Returns the minimum stat levels needed to wield the weapon.
    #[must_use]
    pub fn required_stats(&self) -> &BTreeMap<String, u32> {
        &self.required_stats
    }

    /// Returns the effects applied on a hit.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Returns the weapon class.
    #[must_use]
    pub fn class(&self) -> WeaponClass {
        self.class
    }

    /// Returns the maximum reach, if limited.
    #[must_use]
    pub fn reach(&self) -> Option<f64> {
        self.class.reach()
    }

    /// Returns true if a target `distance` away can be hit.
    ///
    /// Negative and NaN distances are never in reach.
    #[must_use]
    pub fn in_reach(&self, distance: f64) -> bool {
        if distance.is_nan() || distance < 0.0 {
            return false;
        }
        self.reach().is_none_or(|reach| distance <= reach)
    }

    /// Checks a wielder's stats against the weapon's requirements.
    ///
    /// A stat the wielder lacks counts as level 0.
    ///
    /// # Errors
    ///
    /// Returns `RequirementNotMet` for the first unmet stat in name order.
    pub fn meets_requirements(&self, stats: &BTreeMap<String, u32>) -> Result<()> {
        for (stat, &needed) in &self.required_stats {
            let actual = stats.get(stat).copied().unwrap_or(0);
            if actual < needed {
                return Err(Error::new(ErrorKind::RequirementNotMet {
                    stat: stat.clone(),
                    required: needed,
                    actual,
                }));
            }
        }
        Ok(())
    }

    /// Lowers durability by `amount`, stopping at zero.
    pub fn wear(&mut self, amount: f64) {
        self.durability = (self.durability - amount.max(0.0)).clamp(0.0, FULL_DURABILITY);
    }

    /// Raises durability by `amount`, stopping at full.
    pub fn repair(&mut self, amount: f64) {
        self.durability = (self.durability + amount.max(0.0)).clamp(0.0, FULL_DURABILITY);
    }

    /// Returns true once durability reaches zero.
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.durability <= 0.0
    }
}

/// Construction parameters for a basic weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WeaponConfig {
    /// Shared item properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: ItemConfig,
    /// Damage per hit (required).
    pub base_damage: Option<f64>,
    /// Starting durability; defaults to 100.
    pub durability: Option<f64>,
    /// Minimum stat levels to wield, e.g. `{"Strength": 9, "Wisdom": 2}`.
    pub required_stats: BTreeMap<String, u32>,
    /// Effects applied on a hit.
    pub effects: Vec<EffectConfig>,
}

impl WeaponConfig {
    /// Starts a configuration from shared item properties.
    #[must_use]
    pub fn new(item: ItemConfig) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    /// Sets the base damage.
    #[must_use]
    pub fn with_base_damage(mut self, base_damage: f64) -> Self {
        self.base_damage = Some(base_damage);
        self
    }

    /// Sets the starting durability.
    #[must_use]
    pub fn with_durability(mut self, durability: f64) -> Self {
        self.durability = Some(durability);
        self
    }

    /// Adds a stat requirement.
    #[must_use]
    pub fn with_required_stat(mut self, stat: impl Into<String>, level: u32) -> Self {
        self.required_stats.insert(stat.into(), level);
        self
    }

    /// Adds an on-hit effect.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectConfig) -> Self {
        self.effects.push(effect);
        self
    }

    /// Validates the configuration and builds a basic weapon.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `InvalidField` for absent or out-of-range
    /// values, including those of the shared item properties and effects.
    pub fn build(self) -> Result<Item> {
        self.build_as("Weapon", WeaponClass::Basic)
    }

    fn build_as(self, entity: &'static str, class: WeaponClass) -> Result<Item> {
        let base_damage = non_negative(
            entity,
            "base_damage",
            required(entity, "base_damage", self.base_damage)?,
        )?;
        let durability = self.durability.unwrap_or(FULL_DURABILITY);
        if !(0.0..=FULL_DURABILITY).contains(&durability) {
            return Err(Error::invalid_field(
                entity,
                "durability",
                format!("must be between 0 and 100, got {durability}"),
            ));
        }
        let effects = self
            .effects
            .into_iter()
            .map(EffectConfig::build)
            .collect::<Result<Vec<_>>>()?;

        let weapon = Weapon {
            base_damage,
            durability,
            required_stats: self.required_stats,
            effects,
            class,
        };
        Item::from_parts(self.item, entity, ItemKind::Weapon(weapon))
    }
}

/// Construction parameters for a melee weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MeleeWeaponConfig {
    /// Shared weapon properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub weapon: WeaponConfig,
    /// Farthest distance a swing connects (required).
    pub swing_radius: Option<f64>,
}

impl MeleeWeaponConfig {
    /// Starts a configuration from shared weapon properties.
    #[must_use]
    pub fn new(weapon: WeaponConfig) -> Self {
        Self {
            weapon,
            swing_radius: None,
        }
    }

    /// Sets the swing radius.
    #[must_use]
    pub fn with_swing_radius(mut self, swing_radius: f64) -> Self {
        self.swing_radius = Some(swing_radius);
        self
    }

    /// Validates the configuration and builds a melee weapon.
    ///
    /// # Errors
    ///
    /// Same as [`WeaponConfig::build`], plus an absent or non-positive swing
    /// radius.
    pub fn build(self) -> Result<Item> {
        const ENTITY: &str = "MeleeWeapon";
        let swing_radius = positive(
            ENTITY,
            "swing_radius",
            required(ENTITY, "swing_radius", self.swing_radius)?,
        )?;
        self.weapon
            .build_as(ENTITY, WeaponClass::Melee { swing_radius })
    }
}

/// Construction parameters for a ranged weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RangedWeaponConfig {
    /// Shared weapon properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub weapon: WeaponConfig,
    /// Farthest distance a shot connects; defaults to 25.
    pub effective_range: Option<f64>,
}

impl RangedWeaponConfig {
    /// Starts a configuration from shared weapon properties.
    #[must_use]
    pub fn new(weapon: WeaponConfig) -> Self {
        Self {
            weapon,
            effective_range: None,
        }
    }

    /// Sets the effective range.
    #[must_use]
    pub fn with_effective_range(mut self, effective_range: f64) -> Self {
        self.effective_range = Some(effective_range);
        self
    }

    /// Validates the configuration and builds a ranged weapon.
    ///
    /// # Errors
    ///
    /// Same as [`WeaponConfig::build`], plus a non-positive range.
    pub fn build(self) -> Result<Item> {
        const ENTITY: &str = "RangedWeapon";
        let effective_range = positive(
            ENTITY,
            "effective_range",
            self.effective_range.unwrap_or(DEFAULT_EFFECTIVE_RANGE),
        )?;
        self.weapon
            .build_as(ENTITY, WeaponClass::Ranged { effective_range })
    }
}
