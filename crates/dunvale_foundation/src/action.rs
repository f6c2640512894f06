//! Verb → handler tables and their inheritance merge.
//!
//! Every entity type owns an [`ActionTable`] of the verbs it answers to. A
//! type's resolved table is its own table with each immediate ancestor's
//! resolved table merged underneath: an ancestor only fills verbs the type
//! has not claimed, and earlier-declared ancestors fill first. Grandparent
//! entries arrive through the parent's already-resolved table, so the merge
//! is one level deep.
//!
//! Resolution happens once, when a type is registered in an
//! [`ActionRegistry`]; instances never recompute it.

use std::collections::HashMap;
use std::fmt;

use im::OrdMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mapping from a verb to the name of the handler that performs it.
///
/// Cloning is O(1); resolved tables share structure with their ancestors.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionTable(OrdMap<String, String>);

impl ActionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self(OrdMap::new())
    }

    /// Creates a table from static `(verb, handler)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same verb.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Returns the number of verbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no verbs are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the handler for a verb.
    #[must_use]
    pub fn get(&self, verb: &str) -> Option<&str> {
        self.0.get(verb).map(String::as_str)
    }

    /// Returns true if the verb is defined.
    #[must_use]
    pub fn contains(&self, verb: &str) -> bool {
        self.0.contains_key(verb)
    }

    /// Sets the handler for a verb, returning the previous handler.
    pub fn insert(&mut self, verb: impl Into<String>, handler: impl Into<String>) -> Option<String> {
        self.0.insert(verb.into(), handler.into())
    }

    /// Iterates over `(verb, handler)` pairs in verb order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(v, h)| (v.as_str(), h.as_str()))
    }

    /// Iterates over verbs in order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copies in every entry of `ancestor` whose verb is not already present.
    ///
    /// Returns the number of entries inherited.
    pub fn merge_from(&mut self, ancestor: &ActionTable) -> usize {
        let mut inherited = 0;
        for (verb, handler) in &ancestor.0 {
            if !self.0.contains_key(verb) {
                self.0.insert(verb.clone(), handler.clone());
                inherited += 1;
            }
        }
        inherited
    }
}

impl fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Into<String>, H: Into<String>> FromIterator<(V, H)> for ActionTable {
    fn from_iter<I: IntoIterator<Item = (V, H)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(v, h)| (v.into(), h.into()))
                .collect(),
        )
    }
}

/// Resolves a type's table from its own entries and its ancestors' resolved tables.
///
/// Ancestors are consulted in declaration order.
#[must_use]
pub fn resolve<'a>(
    own: ActionTable,
    ancestors: impl IntoIterator<Item = &'a ActionTable>,
) -> ActionTable {
    let mut resolved = own;
    for ancestor in ancestors {
        resolved.merge_from(ancestor);
    }
    resolved
}

#[derive(Clone, Debug)]
struct RegisteredType {
    parents: Vec<String>,
    own: ActionTable,
    resolved: ActionTable,
}

/// Cache of resolved action tables keyed by type name.
///
/// Types must be registered after their parents.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    types: HashMap<String, RegisteredType>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type and resolves its table.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateType` if `name` is already registered and
    /// `UnknownType` if a parent has not been registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parents: &[&str],
        own: ActionTable,
    ) -> Result<&ActionTable> {
        let name = name.into();
        if self.types.contains_key(&name) {
            return Err(Error::duplicate_type(name));
        }

        let mut ancestors = Vec::with_capacity(parents.len());
        for parent in parents {
            let registered = self
                .types
                .get(*parent)
                .ok_or_else(|| Error::unknown_type(*parent).in_frame(format!("type {name}")))?;
            ancestors.push(&registered.resolved);
        }

        let resolved = resolve(own.clone(), ancestors);
        tracing::trace!(
            type_name = %name,
            own = own.len(),
            resolved = resolved.len(),
            "resolved action table"
        );

        let entry = self.types.entry(name).or_insert(RegisteredType {
            parents: parents.iter().map(|p| (*p).to_string()).collect(),
            own,
            resolved,
        });
        Ok(&entry.resolved)
    }

    /// Returns the resolved table for a type.
    #[must_use]
    pub fn resolved(&self, name: &str) -> Option<&ActionTable> {
        self.types.get(name).map(|t| &t.resolved)
    }

    /// Returns the table a type declared for itself.
    #[must_use]
    pub fn own(&self, name: &str) -> Option<&ActionTable> {
        self.types.get(name).map(|t| &t.own)
    }

    /// Returns a type's immediate parents in declaration order.
    #[must_use]
    pub fn parents(&self, name: &str) -> Option<&[String]> {
        self.types.get(name).map(|t| t.parents.as_slice())
    }

    /// Returns true if the type is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
