//! Configuration for a game session.

use crate::rules::Rules;

/// Name of the cat when none is given.
pub const DEFAULT_NAME: &str = "Mittens";

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The cat's name.
    pub name: String,
    /// RNG seed. The same seed and rules replay the same forest.
    pub seed: u64,
    /// Numeric tuning.
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            seed: 42,
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    /// Set the cat's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the rules.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
