//! Rooms, the room directory, and world loading for Dunvale.
//!
//! This crate provides:
//! - [`Room`] - A thing bound to one location, holding items and creatures
//! - [`RoomDirectory`] - Which room sits at which location
//! - [`SharedRoomDirectory`] - A directory behind one lock, for sharing
//! - [`World`] - Builds rooms from a [`WorldDefinition`] under a [`WorldConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod definition;
pub mod directory;
pub mod room;
pub mod world;

pub use config::WorldConfig;
pub use definition::{RoomDef, WorldDefinition};
pub use directory::{RoomDirectory, RoomHandle, SharedRoomDirectory};
pub use room::Room;
pub use world::World;
