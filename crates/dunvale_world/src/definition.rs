//! Room and world definitions.
//!
//! With the `serde` feature a world deserializes from data shaped like:
//!
//! ```json
//! { "rooms": [
//!     { "name": "Starting Room", "description": "...", "location": "(0, 0, 0)",
//!       "items": [ { "type": "Item", "name": "Torch", "fill_volume": 1, "weight": 1 } ],
//!       "creatures": [ { "type": "NonSentientCreature", "name": "Rat", "max_health": 2 } ] }
//! ] }
//! ```

use dunvale_entity::{CreatureDef, ItemDef};
use dunvale_foundation::{Location, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::room::Room;

/// Definition of one room and its initial contents.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RoomDef {
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Coordinates, written `"(x, y, z)"`.
    pub location: String,
    /// Map set; the world's default when absent.
    pub map_set: Option<String>,
    /// Items lying in the room.
    pub items: Vec<ItemDef>,
    /// Creatures present.
    pub creatures: Vec<CreatureDef>,
}

impl RoomDef {
    /// Starts a definition with a name, description, and location string.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// Places the room in a named map set.
    #[must_use]
    pub fn in_map_set(mut self, map_set: impl Into<String>) -> Self {
        self.map_set = Some(map_set.into());
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: ItemDef) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a creature.
    #[must_use]
    pub fn with_creature(mut self, creature: CreatureDef) -> Self {
        self.creatures.push(creature);
        self
    }

    /// Builds the room and everything in it.
    ///
    /// # Errors
    ///
    /// Returns the first location, room, item, or creature error. The room's
    /// name is pushed onto the error context.
    pub fn build(self, default_map_set: &str) -> Result<Room> {
        let frame = format!("room {}", self.name);
        self.build_inner(default_map_set)
            .map_err(|e| e.in_frame(frame))
    }

    fn build_inner(self, default_map_set: &str) -> Result<Room> {
        let map_set = self
            .map_set
            .unwrap_or_else(|| default_map_set.to_string());
        let location = Location::parse_in(map_set, &self.location)?;
        let mut room = Room::new(self.name, self.description, location)?;
        for item in self.items {
            room.add_item(item.build()?);
        }
        for creature in self.creatures {
            room.add_creature(creature.build()?);
        }
        Ok(room)
    }
}

/// Definition of a whole world.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WorldDefinition {
    /// Label reported in load errors, such as a file name.
    pub name: Option<String>,
    /// Every room, built in order.
    pub rooms: Vec<RoomDef>,
}

impl WorldDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label reported in load errors.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a room.
    #[must_use]
    pub fn with_room(mut self, room: RoomDef) -> Self {
        self.rooms.push(room);
        self
    }
}
