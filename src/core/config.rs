//! Game configuration.
//!
//! The rules are fixed; the only things a caller chooses are how many
//! automated opponents sit at the table, the RNG seed and the display name
//! of the human seat.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Upper bound the running total may never exceed.
pub const CEILING: i32 = 50;

/// Cards dealt to every seat by `Game::start`.
pub const HAND_SIZE: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Fewest automated opponents a table may have.
pub const MIN_CPUS: usize = 1;

/// Most automated opponents a table may have.
pub const MAX_CPUS: usize = 3;

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of automated opponents (1-3).
    pub cpu_count: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Display name of the human seat.
    pub human_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cpu_count: MIN_CPUS,
            seed: None,
            human_name: "You".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a config with the given number of opponents.
    #[must_use]
    pub fn new(cpu_count: usize) -> Self {
        Self {
            cpu_count,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the human seat's display name.
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Total seats including the human.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.cpu_count + 1
    }

    /// Cards needed to deal every hand plus the opening table card.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        self.player_count() * HAND_SIZE + 1
    }

    /// Check the opponent count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CPUS..=MAX_CPUS).contains(&self.cpu_count) {
            return Err(ConfigError::CpuCount(self.cpu_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cpu_count, 1);
        assert_eq!(config.seed, None);
        assert_eq!(config.human_name, "You");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(3).with_seed(9).with_human_name("Ana");

        assert_eq!(config.player_count(), 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.human_name, "Ana");
        assert_eq!(config.cards_needed(), 17);
    }

    #[test]
    fn test_cpu_count_bounds() {
        assert_eq!(GameConfig::new(0).validate(), Err(ConfigError::CpuCount(0)));
        assert_eq!(GameConfig::new(4).validate(), Err(ConfigError::CpuCount(4)));
        for n in 1..=3 {
            assert!(GameConfig::new(n).validate().is_ok());
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(2).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
