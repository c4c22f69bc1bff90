//! Configuration for a game session.

use crate::effects::EffectTable;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Starting carrying capacity in kilograms.
    pub capacity: f64,
    /// The edibility policy in force for the session.
    pub effects: EffectTable,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: 5.0,
            effects: EffectTable::standard(),
        }
    }
}

impl SessionConfig {
    /// Set the starting carrying capacity (negative values are clamped to
    /// zero).
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity.max(0.0);
        self
    }

    /// Replace the edibility policy.
    pub fn with_effects(mut self, effects: EffectTable) -> Self {
        self.effects = effects;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ConsumeEffect;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.capacity, 5.0);
        assert!(cfg.effects.effect_of("cookie").is_some());
    }

    #[test]
    fn builder_methods() {
        let mut effects = EffectTable::new();
        effects.register("bread", ConsumeEffect::BoostCapacity(1.0));
        let cfg = SessionConfig::default()
            .with_capacity(8.0)
            .with_effects(effects);
        assert_eq!(cfg.capacity, 8.0);
        assert!(cfg.effects.effect_of("cookie").is_none());
        assert!(cfg.effects.effect_of("bread").is_some());
    }

    #[test]
    fn capacity_clamped() {
        let cfg = SessionConfig::default().with_capacity(-1.0);
        assert_eq!(cfg.capacity, 0.0);
    }
}
