//! Rooms: things bound to one location, holding items and creatures.

use dunvale_entity::{Creature, Entity, EntityKind, Item, Thing};
use dunvale_foundation::{Error, Location, Result};

/// A place in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    thing: Thing,
    location: Location,
    items: Vec<Item>,
    creatures: Vec<Creature>,
}

impl Room {
    /// Creates an empty room.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: Location,
    ) -> Result<Self> {
        Ok(Self {
            thing: Thing::named("Room", name, description)?,
            location,
            items: Vec::new(),
            creatures: Vec::new(),
        })
    }

    /// Returns where the room was placed when it was built.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the items lying in the room.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the creatures present.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Drops an item into the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns the first item with the given name.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Takes the first item with the given name.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no such item lies here.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| Error::item_not_found(name))?;
        Ok(self.items.remove(index))
    }

    /// Brings a creature into the room.
    pub fn add_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Returns the first creature with the given name.
    #[must_use]
    pub fn find_creature(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name() == name)
    }

    /// Takes the first creature with the given name out of the room.
    pub fn remove_creature(&mut self, name: &str) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.name() == name)?;
        Some(self.creatures.remove(index))
    }

    /// Returns the hostile creatures present.
    pub fn hostiles(&self) -> impl Iterator<Item = &Creature> + '_ {
        self.creatures.iter().filter(|c| c.is_hostile())
    }
}

impl Entity for Room {
    fn thing(&self) -> &Thing {
        &self.thing
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Room
    }
}
