//! Dunvale - World entity model for a text adventure
//!
//! This crate re-exports all layers of the Dunvale world model for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: dunvale_world      — Rooms, room directory, world loading
//! Layer 1: dunvale_entity     — Things, items, weapons, effects, creatures
//! Layer 0: dunvale_foundation — Core types (Error, Location, ActionTable)
//! ```

pub use dunvale_entity as entity;
pub use dunvale_foundation as foundation;
pub use dunvale_world as world;
