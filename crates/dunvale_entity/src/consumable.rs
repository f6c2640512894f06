//! Consumables: items used up to apply their effects.

use dunvale_foundation::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effect::{Effect, EffectConfig};
use crate::item::{Item, ItemConfig, ItemKind};

/// The consumable facet of an [`Item`].
#[derive(Clone, Debug, PartialEq)]
pub struct Consumable {
    effects: Vec<Effect>,
}

impl Consumable {
    /// Returns the effects applied when consumed.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

/// Construction parameters for a consumable item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ConsumableConfig {
    /// Shared item properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: ItemConfig,
    /// Effects applied when consumed.
    pub effects: Vec<EffectConfig>,
}

impl ConsumableConfig {
    /// Starts a configuration from shared item properties.
    #[must_use]
    pub fn new(item: ItemConfig) -> Self {
        Self {
            item,
            effects: Vec::new(),
        }
    }

    /// Adds an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectConfig) -> Self {
        self.effects.push(effect);
        self
    }

    /// Validates the configuration and builds a consumable.
    ///
    /// # Errors
    ///
    /// Returns the first error from the shared item properties or an effect.
    pub fn build(self) -> Result<Item> {
        let effects = self
            .effects
            .into_iter()
            .map(EffectConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Item::from_parts(
            self.item,
            "Consumable",
            ItemKind::Consumable(Consumable { effects }),
        )
    }
}
