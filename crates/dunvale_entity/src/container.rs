//! Containers: items that hold other items under a volume cap.
//!
//! Volume is a hard limit; weight is not. A container accepts items past its
//! `max_weight` and reports itself overloaded, which wears down what it holds.

use dunvale_foundation::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemConfig, ItemKind};
use crate::thing::{Entity, non_negative, required};

/// The container facet of an [`Item`].
///
/// Invariant: the contained items' fill volumes sum to `current_fill`, which
/// never exceeds `fill_capacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    fill_capacity: f64,
    max_weight: f64,
    current_fill: f64,
    current_weight: f64,
    items: Vec<Item>,
}

/// An item was rejected because it did not fit.
///
/// The rejected item is handed back unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{} needs {} fill volume but only {available} remains", .item.name(), .item.fill_volume())]
pub struct ContainerFull {
    /// The rejected item.
    pub item: Box<Item>,
    /// Fill volume that was still free.
    pub available: f64,
}

impl ContainerFull {
    /// Returns the rejected item.
    #[must_use]
    pub fn into_item(self) -> Item {
        *self.item
    }
}

impl From<ContainerFull> for Error {
    fn from(full: ContainerFull) -> Self {
        Error::new(ErrorKind::CapacityExceeded {
            item: full.item.name().to_string(),
            required: full.item.fill_volume(),
            available: full.available,
        })
    }
}

impl Container {
    /// Returns the total volume the container can hold.
    #[must_use]
    pub fn fill_capacity(&self) -> f64 {
        self.fill_capacity
    }

    /// Returns the weight the container carries without strain.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the volume currently used.
    #[must_use]
    pub fn current_fill(&self) -> f64 {
        self.current_fill
    }

    /// Returns the weight of the contents.
    #[must_use]
    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// Returns the volume still free.
    #[must_use]
    pub fn remaining_capacity(&self) -> f64 {
        self.fill_capacity - self.current_fill
    }

    /// Returns the contained items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the first contained item with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Returns true if the contents weigh more than `max_weight`.
    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        self.current_weight > self.max_weight
    }

    /// Returns how far the contents exceed `max_weight`, or zero.
    #[must_use]
    pub fn overload(&self) -> f64 {
        (self.current_weight - self.max_weight).max(0.0)
    }

    /// Wears every contained weapon by `amount` if the container is overloaded.
    ///
    /// Returns the number of weapons worn.
    pub fn wear_contents(&mut self, amount: f64) -> usize {
        if !self.is_overloaded() {
            return 0;
        }
        let mut worn = 0;
        for weapon in self.items.iter_mut().filter_map(Item::as_weapon_mut) {
            weapon.wear(amount);
            worn += 1;
        }
        worn
    }

    /// Adds an item if its volume fits in the remaining capacity.
    ///
    /// On success the fill and weight grow by the item's volume and total
    /// weight. `max_weight` is not enforced.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerFull`] holding the item when it does not fit; the
    /// container is unchanged.
    pub fn add_item(&mut self, item: Item) -> std::result::Result<(), ContainerFull> {
        let available = self.remaining_capacity();
        if item.fill_volume() > available {
            tracing::debug!(
                item = item.name(),
                required = item.fill_volume(),
                available,
                "container rejected item"
            );
            return Err(ContainerFull {
                item: Box::new(item),
                available,
            });
        }

        self.current_fill += item.fill_volume();
        self.current_weight += item.total_weight();
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the first item with the given name.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no contained item has that name.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| Error::item_not_found(name))?;
        let item = self.items.remove(index);
        self.recompute_totals();
        Ok(item)
    }

    // Totals always equal the sums over `items`.
    fn recompute_totals(&mut self) {
        let (fill, weight) = self
            .items
            .iter()
            .fold((0.0, 0.0), |(fill, weight), i| {
                (fill + i.fill_volume(), weight + i.total_weight())
            });
        self.current_fill = fill;
        self.current_weight = weight;
    }

    /// Removes and returns every item.
    pub fn empty(&mut self) -> Vec<Item> {
        self.current_fill = 0.0;
        self.current_weight = 0.0;
        std::mem::take(&mut self.items)
    }
}

/// Construction parameters for a container item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ContainerConfig {
    /// Shared item properties.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: ItemConfig,
    /// Total volume the container holds (required).
    pub fill_capacity: Option<f64>,
    /// Weight carried without strain (required).
    pub max_weight: Option<f64>,
}

impl ContainerConfig {
    /// Starts a configuration from shared item properties.
    #[must_use]
    pub fn new(item: ItemConfig) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    /// Sets the fill capacity.
    #[must_use]
    pub fn with_fill_capacity(mut self, fill_capacity: f64) -> Self {
        self.fill_capacity = Some(fill_capacity);
        self
    }

    /// Sets the maximum weight.
    #[must_use]
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Validates the configuration and builds an empty container.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` or `InvalidField` for absent or negative
    /// capacity, weight, or volume.
    pub fn build(self) -> Result<Item> {
        const ENTITY: &str = "Container";
        let fill_capacity = non_negative(
            ENTITY,
            "fill_capacity",
            required(ENTITY, "fill_capacity", self.fill_capacity)?,
        )?;
        let max_weight = non_negative(
            ENTITY,
            "max_weight",
            required(ENTITY, "max_weight", self.max_weight)?,
        )?;
        let container = Container {
            fill_capacity,
            max_weight,
            current_fill: 0.0,
            current_weight: 0.0,
            items: Vec::new(),
        };
        Item::from_parts(self.item, ENTITY, ItemKind::Container(container))
    }
}
