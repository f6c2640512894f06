//! Effects applied to creatures by weapons and consumables.

use std::collections::BTreeMap;

use dunvale_foundation::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::thing::{Entity, Thing, non_negative, required};

/// A change applied to a creature: damage, healing, or stat deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    /// Name and description.
    pub thing: Thing,
    /// Category label, such as `"poison"` or `"blessing"`.
    pub effect_type: String,
    /// Whether the effect stays active after it is applied.
    pub lingering: bool,
    /// Turns a lingering effect lasts, if bounded.
    pub linger_time: Option<u32>,
    /// Damage dealt when applied.
    pub damage: Option<f64>,
    /// Health restored when applied.
    pub healing: Option<f64>,
    /// Signed stat deltas, e.g. `{"Strength": -1.0, "Speed": 2.5}`.
    pub stats: BTreeMap<String, f64>,
}

impl Entity for Effect {
    fn thing(&self) -> &Thing {
        &self.thing
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Effect
    }
}

/// Construction parameters for an [`Effect`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EffectConfig {
    /// Display name (required).
    pub name: String,
    /// Description.
    pub description: String,
    /// Category label (required).
    pub effect_type: Option<String>,
    /// Defaults to `false`.
    pub lingering: Option<bool>,
    /// Turns a lingering effect lasts.
    pub linger_time: Option<u32>,
    /// Damage dealt when applied.
    pub damage: Option<f64>,
    /// Health restored when applied.
    pub healing: Option<f64>,
    /// Signed stat deltas.
    pub stats: BTreeMap<String, f64>,
}

impl EffectConfig {
    /// Starts a configuration with a name, description, and type.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        effect_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect_type: Some(effect_type.into()),
            ..Self::default()
        }
    }

    /// Makes the effect linger for the given number of turns.
    #[must_use]
    pub fn lingering_for(mut self, turns: u32) -> Self {
        self.lingering = Some(true);
        self.linger_time = Some(turns);
        self
    }

    /// Sets the damage dealt.
    #[must_use]
    pub fn with_damage(mut self, damage: f64) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Sets the healing done.
    #[must_use]
    pub fn with_healing(mut self, healing: f64) -> Self {
        self.healing = Some(healing);
        self
    }

    /// Adds a stat delta.
    #[must_use]
    pub fn with_stat(mut self, stat: impl Into<String>, delta: f64) -> Self {
        self.stats.insert(stat.into(), delta);
        self
    }

    /// Validates the configuration and builds the effect.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank name or absent type, and
    /// `InvalidField` for negative damage or healing.
    pub fn build(self) -> Result<Effect> {
        const ENTITY: &str = "Effect";
        let thing = Thing::named(ENTITY, self.name, self.description)?;
        let effect_type = required(ENTITY, "effect_type", self.effect_type)?;
        let damage = self
            .damage
            .map(|d| non_negative(ENTITY, "damage", d))
            .transpose()?;
        let healing = self
            .healing
            .map(|h| non_negative(ENTITY, "healing", h))
            .transpose()?;

        Ok(Effect {
            thing,
            effect_type,
            lingering: self.lingering.unwrap_or(false),
            linger_time: self.linger_time,
            damage,
            healing,
            stats: self.stats,
        })
    }
}
