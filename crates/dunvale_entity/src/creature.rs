//! Creatures: things with health, carried items, and active effects.
//!
//! Sentient creatures can talk and are driven by their [`Race`];
//! non-sentient creatures cannot and are driven by their [`Species`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dunvale_foundation::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::definition::ItemDef;
use crate::effect::Effect;
use crate::item::Item;
use crate::kind::EntityKind;
use crate::thing::{Entity, Thing, positive, required};

// =============================================================================
// Races and Species
// =============================================================================

/// Race of a sentient creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Race {
    /// Dwarf.
    Dwarf,
    /// Elf.
    Elf,
    /// Human.
    #[default]
    Human,
    /// Orc.
    Orc,
}

impl Race {
    /// Every race.
    pub const ALL: [Race; 4] = [Self::Dwarf, Self::Elf, Self::Human, Self::Orc];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dwarf => "dwarf",
            Self::Elf => "elf",
            Self::Human => "human",
            Self::Orc => "orc",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_field("SentientCreature", "race", format!("unknown race {s:?}")))
    }
}

/// Species of a non-sentient creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Species {
    /// Dragon.
    Dragon,
    /// Goblin.
    Goblin,
    /// Rat.
    #[default]
    Rat,
    /// Wolf.
    Wolf,
}

impl Species {
    /// Every species.
    pub const ALL: [Species; 4] = [Self::Dragon, Self::Goblin, Self::Rat, Self::Wolf];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dragon => "dragon",
            Self::Goblin => "goblin",
            Self::Rat => "rat",
            Self::Wolf => "wolf",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_field("NonSentientCreature", "species", format!("unknown species {s:?}"))
            })
    }
}

// =============================================================================
// Creature
// =============================================================================

/// The kind-specific facet of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatureKind {
    /// No race or species, such as the player.
    Plain,
    /// Can talk to other creatures.
    Sentient {
        /// Attacks on sight.
        hostile: bool,
        /// Drives the creature's behavior.
        race: Race,
    },
    /// Cannot talk.
    NonSentient {
        /// Attacks on sight.
        hostile: bool,
        /// Drives the creature's behavior.
        species: Species,
    },
}

/// A living thing.
#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    thing: Thing,
    max_health: f64,
    items: Vec<Item>,
    active_effects: Vec<Effect>,
    kind: CreatureKind,
}

impl Creature {
    /// Returns the maximum health.
    #[must_use]
    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    /// Returns the carried items.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the effects currently acting on the creature.
    #[must_use]
    pub fn active_effects(&self) -> &[Effect] {
        &self.active_effects
    }

    /// Returns the kind-specific facet.
    #[must_use]
    pub fn kind(&self) -> CreatureKind {
        self.kind
    }

    /// Returns true if the creature attacks on sight.
    #[must_use]
    pub fn is_hostile(&self) -> bool {
        match self.kind {
            CreatureKind::Plain => false,
            CreatureKind::Sentient { hostile, .. } | CreatureKind::NonSentient { hostile, .. } => {
                hostile
            }
        }
    }

    /// Returns the race of a sentient creature.
    #[must_use]
    pub fn race(&self) -> Option<Race> {
        match self.kind {
            CreatureKind::Sentient { race, .. } => Some(race),
            _ => None,
        }
    }

    /// Returns the species of a non-sentient creature.
    #[must_use]
    pub fn species(&self) -> Option<Species> {
        match self.kind {
            CreatureKind::NonSentient { species, .. } => Some(species),
            _ => None,
        }
    }

    /// Gives the creature an item.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns the first carried item with the given name.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Takes the first carried item with the given name.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the creature carries no such item.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let index = self.item_index(name)?;
        Ok(self.items.remove(index))
    }

    /// Returns the total weight of everything carried.
    #[must_use]
    pub fn carried_weight(&self) -> f64 {
        self.items.iter().map(Item::total_weight).sum()
    }

    /// Applies an effect.
    ///
    /// Lingering effects stay active and are returned by
    /// [`active_effects`](Self::active_effects); others act once and are
    /// dropped. Returns true if the effect stays active.
    pub fn apply_effect(&mut self, effect: Effect) -> bool {
        tracing::trace!(
            creature = %self.thing.name,
            effect = %effect.thing.name,
            lingering = effect.lingering,
            "applying effect"
        );
        if effect.lingering {
            self.active_effects.push(effect);
            true
        } else {
            false
        }
    }

    /// Sums the stat deltas of all active effects.
    #[must_use]
    pub fn stat_modifiers(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for effect in &self.active_effects {
            for (stat, delta) in &effect.stats {
                *totals.entry(stat.clone()).or_insert(0.0) += delta;
            }
        }
        totals
    }

    /// Uses up a carried consumable and applies its effects.
    ///
    /// Returns the spent item.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has that name and `NotConsumable`
    /// if it is not a consumable; in both cases nothing changes.
    pub fn consume(&mut self, name: &str) -> Result<Item> {
        let index = self.item_index(name)?;
        if self.items[index].as_consumable().is_none() {
            return Err(Error::new(ErrorKind::NotConsumable(name.to_string())));
        }
        let item = self.items.remove(index);
        if let Some(consumable) = item.as_consumable() {
            for effect in consumable.effects() {
                self.apply_effect(effect.clone());
            }
        }
        Ok(item)
    }

    fn item_index(&self, name: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| Error::item_not_found(name))
    }
}

impl Entity for Creature {
    fn thing(&self) -> &Thing {
        &self.thing
    }

    fn entity_kind(&self) -> EntityKind {
        match self.kind {
            CreatureKind::Plain => EntityKind::Creature,
            CreatureKind::Sentient { .. } => EntityKind::SentientCreature,
            CreatureKind::NonSentient { .. } => EntityKind::NonSentientCreature,
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Construction parameters shared by every creature.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CreatureConfig {
    /// Display name (required).
    pub name: String,
    /// Description.
    pub description: String,
    /// Maximum health (required, positive).
    pub max_health: Option<f64>,
    /// Items carried from the start.
    pub items: Vec<ItemDef>,
}

impl CreatureConfig {
    /// Starts a configuration with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the maximum health.
    #[must_use]
    pub fn with_max_health(mut self, max_health: f64) -> Self {
        self.max_health = Some(max_health);
        self
    }

    /// Adds a starting item.
    #[must_use]
    pub fn with_item(mut self, item: ItemDef) -> Self {
        self.items.push(item);
        self
    }

    /// Validates the configuration and builds a plain creature.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for a blank name or absent health,
    /// `InvalidField` for non-positive health, or the first item error.
    pub fn build(self) -> Result<Creature> {
        self.build_as("Creature", CreatureKind::Plain)
    }

    fn build_as(self, entity: &'static str, kind: CreatureKind) -> Result<Creature> {
        let thing = Thing::named(entity, self.name, self.description)?;
        let max_health = positive(
            entity,
            "max_health",
            required(entity, "max_health", self.max_health)?,
        )?;
        let items = self
            .items
            .into_iter()
            .map(ItemDef::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Creature {
            thing,
            max_health,
            items,
            active_effects: Vec::new(),
            kind,
        })
    }
}

/// Construction parameters for a sentient creature.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SentientCreatureConfig {
    /// Shared creature properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub creature: CreatureConfig,
    /// Defaults to `false`.
    pub hostile: Option<bool>,
    /// Defaults to [`Race::Human`].
    pub race: Option<Race>,
}

impl SentientCreatureConfig {
    /// Starts a configuration from shared creature properties.
    #[must_use]
    pub fn new(creature: CreatureConfig) -> Self {
        Self {
            creature,
            ..Self::default()
        }
    }

    /// Sets hostility.
    #[must_use]
    pub fn with_hostile(mut self, hostile: bool) -> Self {
        self.hostile = Some(hostile);
        self
    }

    /// Sets the race.
    #[must_use]
    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    /// Validates the configuration and builds a sentient creature.
    ///
    /// # Errors
    ///
    /// Same as [`CreatureConfig::build`].
    pub fn build(self) -> Result<Creature> {
        let kind = CreatureKind::Sentient {
            hostile: self.hostile.unwrap_or(false),
            race: self.race.unwrap_or_default(),
        };
        self.creature.build_as("SentientCreature", kind)
    }
}

/// Construction parameters for a non-sentient creature.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NonSentientCreatureConfig {
    /// Shared creature properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub creature: CreatureConfig,
    /// Defaults to `true`.
    pub hostile: Option<bool>,
    /// Defaults to [`Species::Rat`].
    pub species: Option<Species>,
}

impl NonSentientCreatureConfig {
    /// Starts a configuration from shared creature properties.
    #[must_use]
    pub fn new(creature: CreatureConfig) -> Self {
        Self {
            creature,
            ..Self::default()
        }
    }

    /// Sets hostility.
    #[must_use]
    pub fn with_hostile(mut self, hostile: bool) -> Self {
        self.hostile = Some(hostile);
        self
    }

    /// Sets the species.
    #[must_use]
    pub fn with_species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    /// Validates the configuration and builds a non-sentient creature.
    ///
    /// # Errors
    ///
    /// Same as [`CreatureConfig::build`].
    pub fn build(self) -> Result<Creature> {
        let kind = CreatureKind::NonSentient {
            hostile: self.hostile.unwrap_or(true),
            species: self.species.unwrap_or_default(),
        };
        self.creature.build_as("NonSentientCreature", kind)
    }
}
