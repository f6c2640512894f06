//! Error types for the Dunvale world model.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::location::LocationKey;

/// The main error type for Dunvale operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating the context if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self::new(ErrorKind::MissingField { entity, field })
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(
        entity: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidField {
            entity,
            field,
            reason: reason.into(),
        })
    }

    /// Creates a location parse error.
    #[must_use]
    pub fn location_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::LocationParse {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates a duplicate type error.
    #[must_use]
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateType(name.into()))
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotFound(name.into()))
    }

    /// Creates a duplicate room error.
    #[must_use]
    pub fn duplicate_room(key: LocationKey) -> Self {
        Self::new(ErrorKind::DuplicateRoom(key))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required field was not supplied and has no default.
    #[error("missing field: {entity} requires `{field}`")]
    MissingField {
        /// The entity kind being constructed.
        entity: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A field was supplied with a value outside its domain.
    #[error("invalid field: {entity}.{field}: {reason}")]
    InvalidField {
        /// The entity kind being constructed.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An item did not fit into a container.
    #[error("capacity exceeded: {item} needs {required} but only {available} remains")]
    CapacityExceeded {
        /// Name of the rejected item.
        item: String,
        /// Fill volume the item needs.
        required: f64,
        /// Fill volume still available.
        available: f64,
    },

    /// A location string could not be parsed.
    #[error("cannot parse location {input:?}: {reason}")]
    LocationParse {
        /// The rejected input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A target was beyond a weapon's reach.
    #[error("out of reach: {weapon} reaches {reach} but target is {distance} away")]
    OutOfReach {
        /// Name of the weapon.
        weapon: String,
        /// Distance to the target.
        distance: f64,
        /// The weapon's reach.
        reach: f64,
    },

    /// A wielder does not meet a weapon's stat requirement.
    #[error("requirement not met: {stat} must be at least {required}, got {actual}")]
    RequirementNotMet {
        /// The stat name.
        stat: String,
        /// Minimum level required.
        required: u32,
        /// The wielder's level.
        actual: u32,
    },

    /// An item cannot be consumed.
    #[error("not consumable: {0}")]
    NotConsumable(String),

    /// An item cannot be used to attack.
    #[error("not a weapon: {0}")]
    NotAWeapon(String),

    /// No item with the given name was found.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A parent type was not registered before its child.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A type name was registered twice.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// Two rooms were defined at the same location.
    #[error("duplicate room at {0}")]
    DuplicateRoom(LocationKey),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source label, such as a world definition name.
    pub source: Option<String>,
    /// Stack of definitions being built when the error occurred.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the Dunvale error.
pub type Result<T> = std::result::Result<T, Error>;
