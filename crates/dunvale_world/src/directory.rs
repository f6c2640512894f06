//! The room directory: which room sits at which location.
//!
//! The directory maps a [`LocationKey`] to a [`RoomHandle`]. It shares rooms
//! rather than owning them: moving or swapping entries never touches the
//! rooms themselves, and a handle obtained before a move still points at the
//! same room afterwards.
//!
//! [`RoomDirectory`] is mutated through `&mut self` by a single owner.
//! [`SharedRoomDirectory`] wraps one behind a single `RwLock` for callers
//! that need to share it across threads.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dunvale_foundation::{Location, LocationKey};

use crate::room::Room;

// =============================================================================
// RoomHandle
// =============================================================================

/// A shared, lockable reference to a room.
///
/// Cloning a handle is cheap and yields another reference to the same room.
#[derive(Clone, Debug)]
pub struct RoomHandle(Arc<RwLock<Room>>);

impl RoomHandle {
    /// Wraps a room in a new handle.
    #[must_use]
    pub fn new(room: Room) -> Self {
        Self(Arc::new(RwLock::new(room)))
    }

    /// Locks the room for reading.
    ///
    /// A lock poisoned by a panicking writer is recovered.
    pub fn read(&self) -> RwLockReadGuard<'_, Room> {
        self.0.read().unwrap_or_else(|poisoned| {
            tracing::warn!("room lock poisoned; recovering for read");
            poisoned.into_inner()
        })
    }

    /// Locks the room for writing.
    ///
    /// A lock poisoned by a panicking writer is recovered.
    pub fn write(&self) -> RwLockWriteGuard<'_, Room> {
        self.0.write().unwrap_or_else(|poisoned| {
            tracing::warn!("room lock poisoned; recovering for write");
            poisoned.into_inner()
        })
    }

    /// Returns true if both handles refer to the same room.
    #[must_use]
    pub fn ptr_eq(&self, other: &RoomHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Room> for RoomHandle {
    fn from(room: Room) -> Self {
        Self::new(room)
    }
}

// =============================================================================
// RoomDirectory
// =============================================================================

/// Maps locations to rooms. At most one room per location.
#[derive(Clone, Debug, Default)]
pub struct RoomDirectory {
    rooms: HashMap<LocationKey, RoomHandle>,
}

impl RoomDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room at `loc`, if any.
    #[must_use]
    pub fn get_room(&self, loc: &Location) -> Option<RoomHandle> {
        self.rooms.get(&loc.key()).cloned()
    }

    /// Returns true if a room sits at `loc`.
    ///
    /// Prefer [`get_room`](Self::get_room) when the room itself is needed.
    #[must_use]
    pub fn room_exists(&self, loc: &Location) -> bool {
        self.rooms.contains_key(&loc.key())
    }

    /// Places a room at `loc`, replacing any room already there.
    pub fn set_room(&mut self, loc: &Location, room: impl Into<RoomHandle>) {
        let key = loc.key();
        tracing::debug!(location = %key, "set room");
        self.rooms.insert(key, room.into());
    }

    /// Moves the room at `old` to `new`.
    ///
    /// Any room already at `new` is dropped from the directory. Moving a
    /// room onto its own location keeps it. Returns false, changing nothing,
    /// if no room sits at `old`.
    pub fn move_room(&mut self, old: &Location, new: &Location) -> bool {
        let (from, to) = (old.key(), new.key());
        let Some(room) = self.rooms.remove(&from) else {
            tracing::debug!(from = %from, to = %to, "move failed: no room at source");
            return false;
        };
        tracing::debug!(from = %from, to = %to, "moved room");
        self.rooms.insert(to, room);
        true
    }

    /// Exchanges the rooms at `a` and `b`.
    ///
    /// Returns false, changing nothing, unless rooms sit at both locations.
    pub fn swap_rooms(&mut self, a: &Location, b: &Location) -> bool {
        let (ka, kb) = (a.key(), b.key());
        if !(self.rooms.contains_key(&ka) && self.rooms.contains_key(&kb)) {
            tracing::debug!(a = %ka, b = %kb, "swap failed: a location is empty");
            return false;
        }
        if ka != kb {
            if let (Some(ra), Some(rb)) = (self.rooms.remove(&ka), self.rooms.remove(&kb)) {
                self.rooms.insert(ka.clone(), rb);
                self.rooms.insert(kb.clone(), ra);
            }
        }
        tracing::debug!(a = %ka, b = %kb, "swapped rooms");
        true
    }

    /// Removes the room at `loc`, returning it. Does nothing if empty.
    pub fn remove_room(&mut self, loc: &Location) -> Option<RoomHandle> {
        let key = loc.key();
        let removed = self.rooms.remove(&key);
        if removed.is_some() {
            tracing::debug!(location = %key, "removed room");
        }
        removed
    }

    /// Returns the number of occupied locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if no rooms are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns every occupied location, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationKey> + '_ {
        self.rooms.keys()
    }

    /// Returns the rooms placed in the named map set.
    pub fn rooms_in_map_set<'a>(
        &'a self,
        map_set: &'a str,
    ) -> impl Iterator<Item = (&'a LocationKey, &'a RoomHandle)> + 'a {
        self.rooms.iter().filter(move |(k, _)| k.map_set == map_set)
    }
}

// =============================================================================
// SharedRoomDirectory
// =============================================================================

/// A [`RoomDirectory`] behind one `RwLock`, shareable across threads.
///
/// Every operation takes the lock once, so each is atomic with respect to
/// the others. Cloning shares the same directory.
#[derive(Clone, Debug, Default)]
pub struct SharedRoomDirectory {
    inner: Arc<RwLock<RoomDirectory>>,
}

impl SharedRoomDirectory {
    /// Creates an empty shared directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RoomDirectory> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("directory lock poisoned; recovering for read");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, RoomDirectory> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("directory lock poisoned; recovering for write");
            poisoned.into_inner()
        })
    }

    /// See [`RoomDirectory::get_room`].
    #[must_use]
    pub fn get_room(&self, loc: &Location) -> Option<RoomHandle> {
        self.read().get_room(loc)
    }

    /// See [`RoomDirectory::room_exists`].
    #[must_use]
    pub fn room_exists(&self, loc: &Location) -> bool {
        self.read().room_exists(loc)
    }

    /// See [`RoomDirectory::set_room`].
    pub fn set_room(&self, loc: &Location, room: impl Into<RoomHandle>) {
        self.write().set_room(loc, room);
    }

    /// See [`RoomDirectory::move_room`].
    pub fn move_room(&self, old: &Location, new: &Location) -> bool {
        self.write().move_room(old, new)
    }

    /// See [`RoomDirectory::swap_rooms`].
    pub fn swap_rooms(&self, a: &Location, b: &Location) -> bool {
        self.write().swap_rooms(a, b)
    }

    /// See [`RoomDirectory::remove_room`].
    pub fn remove_room(&self, loc: &Location) -> Option<RoomHandle> {
        self.write().remove_room(loc)
    }

    /// See [`RoomDirectory::len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// See [`RoomDirectory::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a copy of every occupied location.
    #[must_use]
    pub fn locations(&self) -> Vec<LocationKey> {
        self.read().locations().cloned().collect()
    }

    /// Returns a snapshot of the directory.
    ///
    /// The snapshot shares room handles with the live directory.
    #[must_use]
    pub fn snapshot(&self) -> RoomDirectory {
        self.read().clone()
    }
}

impl From<RoomDirectory> for SharedRoomDirectory {
    fn from(directory: RoomDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }
}
