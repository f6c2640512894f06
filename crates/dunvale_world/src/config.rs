//! Configuration for world loading.

use dunvale_foundation::DEFAULT_MAP_SET;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for building a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WorldConfig {
    /// Map set for rooms whose definition names none.
    pub default_map_set: String,

    /// Whether a later room definition may replace an earlier one at the
    /// same location (false = duplicate locations are an error).
    pub allow_room_overwrite: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            default_map_set: DEFAULT_MAP_SET.to_string(),
            allow_room_overwrite: false,
        }
    }
}

impl WorldConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that lets later rooms replace earlier ones.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            allow_room_overwrite: true,
            ..Self::default()
        }
    }

    /// Builder method to set the default map set.
    #[must_use]
    pub fn with_default_map_set(mut self, map_set: impl Into<String>) -> Self {
        self.default_map_set = map_set.into();
        self
    }

    /// Builder method to allow or forbid room overwrites.
    #[must_use]
    pub fn with_allow_room_overwrite(mut self, allow: bool) -> Self {
        self.allow_room_overwrite = allow;
        self
    }
}
