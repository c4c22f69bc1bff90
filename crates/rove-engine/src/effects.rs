//! Data-driven effects of consuming items.
//!
//! The edibility policy is a table keyed by item description, not a
//! hardcoded comparison: registering a new entry is all it takes to make
//! another item edible. Descriptions absent from the table are not edible.

use std::collections::HashMap;

/// What happens when the player consumes an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsumeEffect {
    /// Raise the carrying capacity by the given amount, in kilograms.
    BoostCapacity(f64),
}

/// The edibility policy: item description → effect of eating it.
#[derive(Debug, Clone, Default)]
pub struct EffectTable {
    entries: HashMap<String, ConsumeEffect>,
}

impl EffectTable {
    /// Create an empty table in which nothing is edible.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock policy: a magic cookie that adds 2 kg of capacity.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register("cookie", ConsumeEffect::BoostCapacity(2.0));
        table
    }

    /// Register (or replace) the effect of eating items with this
    /// description.
    pub fn register(&mut self, description: impl Into<String>, effect: ConsumeEffect) {
        self.entries.insert(description.into(), effect);
    }

    /// Look up the effect of eating an item with this description.
    pub fn effect_of(&self, description: &str) -> Option<ConsumeEffect> {
        self.entries.get(description).copied()
    }
}
