use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every item instance in the world.
///
/// Two items may share a description and weight; the ID is what tells them
/// apart. All ownership bookkeeping goes through the ID, so "take the key"
/// always moves one specific instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named, weighted object that can sit in a location or be carried.
///
/// Immutable once created. Negative weights are clamped to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// The item's identity.
    pub id: ItemId,
    /// Display name, e.g. "key". Not guaranteed unique across the world.
    pub description: String,
    /// Weight in kilograms, never negative.
    pub weight: f64,
}

impl Item {
    /// Create an item with a description and weight.
    pub fn new(description: impl Into<String>, weight: f64) -> Self {
        Self {
            id: ItemId::new(),
            description: description.into(),
            weight: weight.max(0.0),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight: {}kg)", self.description, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_with_same_description_are_distinct() {
        let a = Item::new("coin", 0.1);
        let b = Item::new("coin", 0.1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn negative_weight_clamped() {
        let item = Item::new("balloon", -1.0);
        assert_eq!(item.weight, 0.0);
    }

    #[test]
    fn display_includes_weight() {
        let item = Item::new("key", 0.1);
        assert_eq!(item.to_string(), "key (weight: 0.1kg)");
    }
}
