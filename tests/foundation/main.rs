//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ActionTable, ActionRegistry, Location, and Error.

mod actions;
mod locations;
