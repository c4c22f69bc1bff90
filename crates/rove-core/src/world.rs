use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::item::{Item, ItemId};
use crate::location::{Location, LocationId};

/// Metadata about the world itself, used for the opening banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// The world's name.
    pub name: String,
    /// A short blurb shown when a session begins.
    pub description: String,
}

impl WorldMeta {
    /// Create metadata with the given name and an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the description blurb.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The central world model. Owns all locations and every item in play.
///
/// Locations hold the IDs of the items lying in them; the `World` keeps the
/// instances themselves in one arena so an item can change hands without
/// being cloned. Topology is built once (`add_location`, `set_exit`,
/// `place_item`) and only item ownership changes during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Metadata about the world.
    pub meta: WorldMeta,
    locations: HashMap<LocationId, Location>,
    items: HashMap<ItemId, Item>,
}

impl World {
    /// Create an empty world.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            locations: HashMap::new(),
            items: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a location to the world. Returns the location's ID.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id;
        self.locations.insert(id, location);
        id
    }

    /// Define an exit from `from` towards `to`.
    ///
    /// Redefining a direction overwrites the previous target. Both ends must
    /// already exist in the world.
    pub fn set_exit(
        &mut self,
        from: LocationId,
        direction: impl Into<String>,
        to: LocationId,
    ) -> WorldResult<()> {
        if !self.locations.contains_key(&to) {
            return Err(WorldError::LocationNotFound(to));
        }
        let origin = self
            .locations
            .get_mut(&from)
            .ok_or(WorldError::LocationNotFound(from))?;
        origin.set_exit(direction, to);
        Ok(())
    }

    /// Register a new item and place it in `at`. Returns the item's ID.
    pub fn place_item(&mut self, at: LocationId, item: Item) -> WorldResult<ItemId> {
        let location = self
            .locations
            .get_mut(&at)
            .ok_or(WorldError::LocationNotFound(at))?;
        let id = item.id;
        location.add_item(id);
        self.items.insert(id, item);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a reference to a location by ID.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Get a reference to an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// The neighbor reached by going in `direction` from `from`, if any.
    pub fn exit(&self, from: LocationId, direction: &str) -> Option<LocationId> {
        self.locations.get(&from).and_then(|l| l.exit(direction))
    }

    /// Find the first item at `at` whose description matches, in encounter
    /// order. Does not mutate.
    ///
    /// Several items with the same description may lie in one place; only
    /// the first is returned.
    pub fn find_item_at(&self, at: LocationId, description: &str) -> Option<ItemId> {
        let location = self.locations.get(&at)?;
        location
            .items()
            .iter()
            .copied()
            .find(|id| self.items.get(id).is_some_and(|i| i.description == description))
    }

    /// Number of locations in the world.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of item instances still in play (in locations or carried).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // -----------------------------------------------------------------------
    // Item ownership transfers
    // -----------------------------------------------------------------------

    /// Remove an item instance from a location. Returns whether that exact
    /// instance was present.
    ///
    /// The instance stays registered in the world; the caller is taking over
    /// ownership (e.g. into an inventory).
    pub fn remove_item(&mut self, at: LocationId, id: ItemId) -> bool {
        self.locations
            .get_mut(&at)
            .is_some_and(|l| l.remove_item(id))
    }

    /// Place an already-registered item instance in a location.
    ///
    /// The caller must be relinquishing ownership (e.g. from an inventory);
    /// nothing here checks whether another container still lists the ID.
    pub fn add_item(&mut self, at: LocationId, id: ItemId) -> WorldResult<()> {
        if !self.items.contains_key(&id) {
            return Err(WorldError::ItemNotFound(id));
        }
        let location = self
            .locations
            .get_mut(&at)
            .ok_or(WorldError::LocationNotFound(at))?;
        location.add_item(id);
        Ok(())
    }

    /// Remove an item instance from play entirely (it has been consumed).
    ///
    /// The caller must already have unlinked the ID from whatever container
    /// held it.
    pub fn discard_item(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    // -----------------------------------------------------------------------
    // Description
    // -----------------------------------------------------------------------

    /// Compose the full description of a location:
    ///
    /// ```text
    /// You are in the kitchen.
    /// Exits: north west
    /// Items here: key (weight: 0.1kg) map (weight: 0.05kg)
    /// ```
    ///
    /// Exits appear in definition order and items in encounter order, so the
    /// text is reproducible. The items line is omitted when nothing is here.
    pub fn describe(&self, at: LocationId) -> WorldResult<String> {
        let location = self
            .locations
            .get(&at)
            .ok_or(WorldError::LocationNotFound(at))?;

        let mut text = format!("You are {}.\nExits:", location.description);
        for direction in location.exit_directions() {
            let _ = write!(text, " {direction}");
        }

        if !location.items().is_empty() {
            text.push_str("\nItems here:");
            for id in location.items() {
                if let Some(item) = self.items.get(id) {
                    let _ = write!(text, " {item}");
                }
            }
        }

        Ok(text)
    }
}
