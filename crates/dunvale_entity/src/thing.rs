//! The base entity: anything with a name and a description.

use dunvale_foundation::{ActionTable, Error, Result};

use crate::kind::EntityKind;

/// Name and description shared by every entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thing {
    /// Display name.
    pub name: String,
    /// Prose shown when the thing is looked at.
    pub description: String,
}

impl Thing {
    /// Creates a thing.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Creates a thing, rejecting an empty name.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming `entity` if `name` is empty.
    pub fn named(
        entity: &'static str,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::missing_field(entity, "name"));
        }
        Ok(Self::new(name, description))
    }
}

/// Common surface of every entity kind.
pub trait Entity {
    /// Returns the name and description.
    fn thing(&self) -> &Thing;

    /// Returns the concrete kind, which selects the action table.
    fn entity_kind(&self) -> EntityKind;

    /// Returns the display name.
    fn name(&self) -> &str {
        &self.thing().name
    }

    /// Returns the description.
    fn description(&self) -> &str {
        &self.thing().description
    }

    /// Returns the verbs this entity answers to.
    fn effective_actions(&self) -> &'static ActionTable {
        self.entity_kind().effective_actions()
    }

    /// Returns the handler for a verb, if the entity answers to it.
    fn handler_for(&self, verb: &str) -> Option<&'static str> {
        self.effective_actions().get(verb)
    }
}

impl Entity for Thing {
    fn thing(&self) -> &Thing {
        self
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Thing
    }
}

// =============================================================================
// Field validation
// =============================================================================

pub(crate) fn required<T>(entity: &'static str, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::missing_field(entity, field))
}

pub(crate) fn non_negative(entity: &'static str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(Error::invalid_field(
            entity,
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(value)
}

pub(crate) fn positive(entity: &'static str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(Error::invalid_field(
            entity,
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}
