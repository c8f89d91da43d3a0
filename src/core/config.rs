//! Game configuration
//!
//! Every tunable number of a game lives here. A config can be built in code,
//! taken from `Default`, or read from a TOML file where any subset of the
//! fields may be given.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SignalError};

/// Immutable parameters of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    ///
    /// The enemy holds row 0 and the player holds the last row at start.
    /// The player must keep the center cell `(size/2, size/2)`.
    pub size: u32,

    /// Enemy troops spread over row 0 at start
    pub enemy_total: u32,

    /// Player troops spread over the last row at start
    pub player_total: u32,

    /// Troops the player may place per deployment call
    ///
    /// Fixed per call; unused budget does not carry over.
    pub player_reinforcements: u32,

    /// Seed for the game's random source
    ///
    /// `None` seeds from entropy, which makes the run unreproducible.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 5,
            enemy_total: 100,
            player_total: 80,
            player_reinforcements: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Same config with a fixed seed, for reproducible games
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SignalError::InvalidConfig(
                "size must be at least 1".into(),
            ));
        }
        // Coordinates are i32 and cell counts are usize
        if self.size > i32::MAX as u32 / 2 {
            return Err(SignalError::InvalidConfig(format!(
                "size ({}) is too large",
                self.size
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.enemy_total, 100);
        assert_eq!(config.player_total, 80);
        assert_eq!(config.player_reinforcements, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("size = 7\nseed = 99\n").unwrap();
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.enemy_total, 100);
        assert_eq!(config.player_reinforcements, 10);
    }

    #[test]
    fn test_with_seed_only_sets_seed() {
        let config = GameConfig { size: 9, ..GameConfig::default() }.with_seed(5);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.size, 9);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = GameConfig::from_toml_str("size = 0").unwrap_err();
        assert!(matches!(err, SignalError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(matches!(err, SignalError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/signal-front.toml")).unwrap_err();
        assert!(matches!(err, SignalError::Io(_)));
    }
}
