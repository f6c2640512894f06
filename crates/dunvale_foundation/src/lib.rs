//! Core types, errors, locations, and action tables for Dunvale.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Location`] - Coordinates scoped to a named map set
//! - [`ActionTable`] / [`ActionRegistry`] - Verb tables resolved through type inheritance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod error;
pub mod location;

pub use action::{ActionRegistry, ActionTable, resolve};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use location::{DEFAULT_MAP_SET, Location, LocationKey};
