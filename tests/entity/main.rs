//! Integration tests for Layer 1: Entity
//!
//! Tests for kinds and their action tables, items, containers, weapons,
//! consumables, and creatures.

mod containers;
mod creatures;
mod kinds;
mod weapons;
