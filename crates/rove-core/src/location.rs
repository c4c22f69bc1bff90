use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::ItemId;

/// Unique identifier for every location in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    /// Generate a new random location ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A node in the world graph: a description, directed named exits, and the
/// items currently lying here.
///
/// Exits are directed and may be asymmetric — an exit from A to B does not
/// imply one from B to A. They are kept in definition order so listings are
/// reproducible, with at most one exit per direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// The location's identity.
    pub id: LocationId,
    /// Display text, e.g. "in a lecture theater".
    pub description: String,
    exits: Vec<(String, LocationId)>,
    items: Vec<ItemId>,
}

impl Location {
    /// Create a location with the given description and no exits or items.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Define or redefine the exit in `direction`.
    ///
    /// Redefinition overwrites the target in place, keeping the direction's
    /// position in the listing order.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: LocationId) {
        let direction = direction.into();
        if let Some(slot) = self.exits.iter_mut().find(|(d, _)| *d == direction) {
            slot.1 = target;
        } else {
            self.exits.push((direction, target));
        }
    }

    /// The neighbor reached by going in `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<LocationId> {
        self.exits
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, target)| *target)
    }

    /// Direction names in the order the exits were defined.
    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|(d, _)| d.as_str())
    }

    /// Items present here, in encounter order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub(crate) fn add_item(&mut self, id: ItemId) {
        self.items.push(id);
    }

    pub(crate) fn remove_item(&mut self, id: ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|&held| held == id) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}
