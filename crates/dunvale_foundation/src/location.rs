//! Coordinates scoped to a named map set.
//!
//! A [`Location`] is an `(x, y, z)` triple inside a map set, the name of a
//! world or dimension such as `"Over-world"` or `"Mirror-Dimension"`. The map
//! set is fixed at construction; the coordinates change only through
//! [`Location::set_location`], which never leaves a partial update behind.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Map set used when none is given.
pub const DEFAULT_MAP_SET: &str = "__default__";

/// Identity of a location for indexing: `(map_set, x, y, z)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationKey {
    /// The map set name.
    pub map_set: String,
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.map_set, self.x, self.y, self.z)
    }
}

/// A point in a map set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    map_set: String,
    x: i64,
    y: i64,
    z: i64,
}

impl Default for Location {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Location {
    /// Creates a location in the default map set.
    #[must_use]
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self::in_map_set(DEFAULT_MAP_SET, x, y, z)
    }

    /// Creates a location in the named map set.
    #[must_use]
    pub fn in_map_set(map_set: impl Into<String>, x: i64, y: i64, z: i64) -> Self {
        Self {
            map_set: map_set.into(),
            x,
            y,
            z,
        }
    }

    /// Parses `"(x,y,z)"` into a location in the default map set.
    ///
    /// # Errors
    ///
    /// Returns a `LocationParse` error if fewer than three components are
    /// present or a component is not an integer.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_in(DEFAULT_MAP_SET, input)
    }

    /// Parses `"(x,y,z)"` into a location in the named map set.
    ///
    /// # Errors
    ///
    /// Same as [`Location::parse`].
    pub fn parse_in(map_set: impl Into<String>, input: &str) -> Result<Self> {
        let mut location = Self::in_map_set(map_set, 0, 0, 0);
        location.set_location(input)?;
        Ok(location)
    }

    /// Overwrites the coordinates from a `"(x,y,z)"` string.
    ///
    /// Surrounding parentheses and whitespace around each component are
    /// ignored, as are components past the third. On failure the previous
    /// coordinates are kept.
    ///
    /// # Errors
    ///
    /// Returns a `LocationParse` error if fewer than three components are
    /// present or a component is not an integer.
    pub fn set_location(&mut self, input: &str) -> Result<()> {
        let (x, y, z) = parse_coordinates(input)?;
        self.x = x;
        self.y = y;
        self.z = z;
        Ok(())
    }

    /// Returns the map set name.
    #[must_use]
    pub fn map_set(&self) -> &str {
        &self.map_set
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> i64 {
        self.z
    }

    /// Returns the indexing key for this location.
    #[must_use]
    pub fn key(&self) -> LocationKey {
        LocationKey {
            map_set: self.map_set.clone(),
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Euclidean distance to another location.
    ///
    /// Returns `None` when the locations are in different map sets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance_to(&self, other: &Location) -> Option<f64> {
        if self.map_set != other.map_set {
            return None;
        }
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        Some((dx * dx + dy * dy + dz * dz).sqrt())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", self.map_set, self.x, self.y, self.z)
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&Location> for LocationKey {
    fn from(location: &Location) -> Self {
        location.key()
    }
}

fn parse_coordinates(input: &str) -> Result<(i64, i64, i64)> {
    let inner = input.trim().trim_matches(['(', ')']);
    let mut parts = inner.split(',').map(str::trim);

    let mut next = |axis: &str| -> Result<i64> {
        let part = parts
            .next()
            .ok_or_else(|| Error::location_parse(input, format!("missing {axis} coordinate")))?;
        part.parse::<i64>()
            .map_err(|e| Error::location_parse(input, format!("{axis} coordinate {part:?}: {e}")))
    };

    let x = next("x")?;
    let y = next("y")?;
    let z = next("z")?;
    Ok((x, y, z))
}
