//! Game and engine configuration with documented tunables
//!
//! `GameConfig` is what the configuration collaborator hands over at startup.
//! `EngineConfig` holds the knobs that shape agent behaviour; the defaults
//! are the values the heuristic was tuned with.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};
use crate::decision::StrategyKind;

/// Startup parameters supplied by the configuration collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square grid, in cells
    pub grid_size: u32,
    /// Number of snakes to place
    pub snake_count: u32,
    /// Simulation ticks per second
    pub game_speed: u32,
    /// Pixel size of one cell (presentation only, carried through)
    pub cell_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 30,
            snake_count: 4,
            game_speed: 10,
            cell_size: 20,
        }
    }
}

impl GameConfig {
    /// Wall-clock time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.game_speed.max(1)))
    }

    /// Reject input the engine cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ArenaError::InvalidConfig(
                "grid_size must be positive".into(),
            ));
        }
        if self.grid_size > i32::MAX as u32 {
            return Err(ArenaError::InvalidConfig(format!(
                "grid_size ({}) exceeds the coordinate range",
                self.grid_size
            )));
        }
        if self.snake_count == 0 {
            return Err(ArenaError::InvalidConfig(
                "snake_count must be positive".into(),
            ));
        }
        if self.game_speed == 0 {
            return Err(ArenaError::InvalidConfig(
                "game_speed must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Initial placement tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Preferred distance of starting cells from the walls
    ///
    /// Clamped to a quarter of the grid so small boards still get snakes.
    pub edge_margin: u32,
    /// Starting heads must be further apart than this (Chebyshev)
    pub min_separation: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            edge_margin: 8,
            min_separation: 4,
        }
    }
}

/// Power-up lifecycle tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    /// Chance per tick that a new power-up appears (while under the cap)
    pub spawn_chance: f64,
    /// Ticks a power-up lasts, both on the board and once collected
    ///
    /// 50 ticks is five seconds at the default speed of 10.
    pub duration_ticks: u32,
    /// Moves per tick while Speed is active
    pub speed_multiplier: u32,
    /// Fruit score factor while Multiplier is active
    pub score_multiplier: u32,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.02,
            duration_ticks: 50,
            speed_multiplier: 2,
            score_multiplier: 2,
        }
    }
}

/// Weights for the scoring strategy
///
/// Penalties are stored as positive magnitudes and subtracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Subtracted when another head is adjacent (incl. diagonals) to the target cell
    pub head_risk_penalty: i32,
    /// Multiplier for the flood-fill space score
    pub space_weight: i32,
    /// Hops explored by the space flood-fill
    pub flood_depth: u32,
    /// Added when the move closes in on the target fruit
    pub fruit_bonus: i32,
    /// Space score required before the fruit bonus is granted
    pub space_threshold: i32,
    /// Subtracted when the move would leave the snake boxed in
    pub trap_penalty: i32,
    /// Fewer reachable cells than this counts as trapped
    pub trap_min_cells: usize,
    /// Stop the trap scan after this many reachable cells
    pub trap_scan_limit: usize,
    /// Multiplier for the distance to the closest other head
    pub spacing_weight: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            head_risk_penalty: 500,
            space_weight: 10,
            flood_depth: 3,
            fruit_bonus: 50,
            space_threshold: 5,
            trap_penalty: 300,
            trap_min_cells: 3,
            trap_scan_limit: 8,
            spacing_weight: 5,
        }
    }
}

/// Everything an `Engine` needs besides the game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: StrategyKind,
    pub spawn: SpawnConfig,
    pub power_ups: PowerUpConfig,
    pub weights: HeuristicWeights,
    /// Entries kept by decision caches before they are flushed
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            spawn: SpawnConfig::default(),
            power_ups: PowerUpConfig::default(),
            weights: HeuristicWeights::default(),
            cache_capacity: 1000,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.power_ups.spawn_chance) {
            return Err(ArenaError::InvalidConfig(format!(
                "power_ups.spawn_chance ({}) must be within [0, 1]",
                self.power_ups.spawn_chance
            )));
        }
        if self.power_ups.speed_multiplier == 0 || self.power_ups.score_multiplier == 0 {
            return Err(ArenaError::InvalidConfig(
                "power-up multipliers must be at least 1".into(),
            ));
        }
        if self.power_ups.duration_ticks == 0 {
            return Err(ArenaError::InvalidConfig(
                "power_ups.duration_ticks must be positive".into(),
            ));
        }
        if self.weights.trap_min_cells > self.weights.trap_scan_limit {
            return Err(ArenaError::InvalidConfig(format!(
                "weights.trap_min_cells ({}) should be <= weights.trap_scan_limit ({})",
                self.weights.trap_min_cells, self.weights.trap_scan_limit
            )));
        }
        if self.cache_capacity == 0 {
            return Err(ArenaError::InvalidConfig(
                "cache_capacity must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Combined file layout: `[game]` and `[engine]` tables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
}

impl ArenaConfig {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(content)?;
        config.game.validate()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(EngineConfig::new().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_input() {
        let mut config = GameConfig::default();
        config.grid_size = 0;
        assert!(matches!(config.validate(), Err(ArenaError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.snake_count = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.game_speed = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_interval_from_speed() {
        let config = GameConfig {
            game_speed: 10,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_engine_rejects_bad_chance() {
        let mut config = EngineConfig::new();
        config.power_ups.spawn_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [game]
            grid_size = 12
            snake_count = 2

            [engine]
            strategy = "search"

            [engine.weights]
            fruit_bonus = 80
        "#;

        let config = ArenaConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.game.grid_size, 12);
        assert_eq!(config.game.snake_count, 2);
        assert_eq!(config.game.game_speed, 10);
        assert_eq!(config.engine.strategy, StrategyKind::Search);
        assert_eq!(config.engine.weights.fruit_bonus, 80);
        assert_eq!(config.engine.weights.space_weight, 10);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let toml_str = r#"
            [game]
            grid_size = 0
        "#;
        assert!(matches!(
            ArenaConfig::from_toml_str(toml_str),
            Err(ArenaError::InvalidConfig(_))
        ));
        assert!(matches!(
            ArenaConfig::from_toml_str("game = 3"),
            Err(ArenaError::ConfigParse(_))
        ));
    }
}
