//! Integration tests for Layer 2: World
//!
//! Tests for the room directory, shared access, and loading worlds from
//! definitions.

mod directory;
