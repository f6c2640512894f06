//! The world: a configuration and the directory of rooms built from it.

use std::collections::HashSet;

use dunvale_foundation::{Error, Location, Result};

use crate::config::WorldConfig;
use crate::definition::{RoomDef, WorldDefinition};
use crate::directory::{RoomDirectory, RoomHandle, SharedRoomDirectory};
use crate::room::Room;

/// Owns the room directory for one game.
#[derive(Clone, Debug, Default)]
pub struct World {
    config: WorldConfig,
    directory: RoomDirectory,
}

impl World {
    /// Creates an empty world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world with the given configuration.
    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config,
            directory: RoomDirectory::new(),
        }
    }

    /// Creates a world and loads a definition into it.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn from_definition(config: WorldConfig, definition: WorldDefinition) -> Result<Self> {
        let mut world = Self::with_config(config);
        world.load(definition)?;
        Ok(world)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns the room directory.
    #[must_use]
    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Returns the room directory for mutation.
    pub fn directory_mut(&mut self) -> &mut RoomDirectory {
        &mut self.directory
    }

    /// Returns the room at `loc`, if any.
    #[must_use]
    pub fn room_at(&self, loc: &Location) -> Option<RoomHandle> {
        self.directory.get_room(loc)
    }

    /// Places a built room at its own location.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRoom` if the location is taken and overwrites are
    /// not allowed.
    pub fn add_room(&mut self, room: Room) -> Result<RoomHandle> {
        let location = room.location().clone();
        if !self.config.allow_room_overwrite && self.directory.room_exists(&location) {
            return Err(Error::duplicate_room(location.key()));
        }
        let handle = RoomHandle::new(room);
        self.directory.set_room(&location, handle.clone());
        Ok(handle)
    }

    /// Builds every room in `definition` and places it in the directory.
    ///
    /// Nothing is placed unless every room builds. Returns the number of
    /// rooms placed.
    ///
    /// # Errors
    ///
    /// Returns the first build error, or `DuplicateRoom` if two rooms share
    /// a location (including one already in the directory) and overwrites
    /// are not allowed. The definition's name, when set, is the error's
    /// source.
    pub fn load(&mut self, definition: WorldDefinition) -> Result<usize> {
        let WorldDefinition { name, rooms } = definition;
        let built = self
            .build_rooms(rooms)
            .map_err(|mut e| match &name {
                Some(source) => {
                    let context = e.context.take().unwrap_or_default();
                    e.with_context(context.with_source(source))
                }
                None => e,
            })?;

        let count = built.len();
        for room in built {
            let location = room.location().clone();
            self.directory.set_room(&location, room);
        }
        tracing::info!(
            source = name.as_deref().unwrap_or("<unnamed>"),
            rooms = count,
            total = self.directory.len(),
            "loaded world definition"
        );
        Ok(count)
    }

    fn build_rooms(&self, defs: Vec<RoomDef>) -> Result<Vec<Room>> {
        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(defs.len());
        for def in defs {
            let frame = format!("room {}", def.name);
            let room = def.build(&self.config.default_map_set)?;
            let key = room.location().key();
            if !self.config.allow_room_overwrite
                && (self.directory.room_exists(room.location()) || seen.contains(&key))
            {
                return Err(Error::duplicate_room(key).in_frame(frame));
            }
            seen.insert(key);
            built.push(room);
        }
        Ok(built)
    }

    /// Consumes the world, returning its directory.
    #[must_use]
    pub fn into_directory(self) -> RoomDirectory {
        self.directory
    }

    /// Consumes the world, returning its directory behind a lock for
    /// sharing across threads.
    #[must_use]
    pub fn into_shared(self) -> SharedRoomDirectory {
        SharedRoomDirectory::from(self.directory)
    }
}
