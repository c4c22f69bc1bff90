//! Player state: inventory, capacity, and movement history.

use rove_core::{ItemId, LocationId, World};

/// The player's state: where they are, what they carry, how much they can
/// carry, and where they have been.
///
/// The inventory holds item IDs in the order they were picked up; the world
/// keeps the instances. The history is a LIFO stack of *past* locations —
/// the current location is never on it immediately after a move.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// The player's current location.
    pub location: LocationId,
    inventory: Vec<ItemId>,
    capacity: f64,
    history: Vec<LocationId>,
}

impl PlayerState {
    /// Create a player at the given location with the given carrying
    /// capacity and nothing in hand.
    pub fn new(location: LocationId, capacity: f64) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            capacity: capacity.max(0.0),
            history: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Inventory & capacity
    // -----------------------------------------------------------------------

    /// Carried item IDs in pickup order.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// The maximum total weight the player may carry, in kilograms.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of everything carried, in kilograms.
    pub fn total_weight(&self, world: &World) -> f64 {
        self.inventory
            .iter()
            .filter_map(|id| world.item(*id))
            .map(|item| item.weight)
            .sum()
    }

    /// Spare capacity, in kilograms.
    pub fn remaining_capacity(&self, world: &World) -> f64 {
        self.capacity - self.total_weight(world)
    }

    /// Append the item to the inventory iff it fits within capacity.
    /// Returns whether it was added; on failure nothing changes.
    pub fn try_add(&mut self, world: &World, id: ItemId) -> bool {
        let Some(item) = world.item(id) else {
            return false;
        };
        if self.total_weight(world) + item.weight <= self.capacity {
            self.inventory.push(id);
            true
        } else {
            false
        }
    }

    /// Remove an item instance from the inventory. Returns whether that
    /// exact instance was held.
    pub fn remove(&mut self, id: ItemId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&held| held == id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Find the first held item whose description matches, in pickup order.
    pub fn find_held(&self, world: &World, description: &str) -> Option<ItemId> {
        self.inventory
            .iter()
            .copied()
            .find(|id| world.item(*id).is_some_and(|i| i.description == description))
    }

    /// Raise the carrying capacity. Capacity only ever grows; negative
    /// deltas are ignored.
    pub fn increase_capacity(&mut self, delta: f64) {
        self.capacity += delta.max(0.0);
    }

    // -----------------------------------------------------------------------
    // Movement history
    // -----------------------------------------------------------------------

    /// Push the location the player is leaving. Call immediately before
    /// changing [`PlayerState::location`].
    pub fn record_visited(&mut self, location: LocationId) {
        self.history.push(location);
    }

    /// Pop and return the most recently left location, or `None` if the
    /// history is empty.
    ///
    /// Destructive: there is no redo. A popped entry is gone even if the
    /// player later re-enters that location.
    pub fn step_back(&mut self) -> Option<LocationId> {
        self.history.pop()
    }

    /// Whether any history remains.
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Forget all movement history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
