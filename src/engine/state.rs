//! The aggregate root handed between ticks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Position, SnakeId, Tick};
use crate::entity::{PowerUp, Snake};
use crate::grid::Grid;

/// Complete simulation state
///
/// Snakes are keyed by id so iteration order is stable and ascending.
/// Renderers and headless runners read it; only the engine produces new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub snakes: BTreeMap<SnakeId, Snake>,
    pub fruits: Vec<Position>,
    pub power_ups: Vec<PowerUp>,
    pub width: i32,
    pub height: i32,
    /// Completed ticks
    #[serde(default)]
    pub tick: Tick,
}

impl GameState {
    /// Empty board of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            snakes: BTreeMap::new(),
            fruits: Vec::new(),
            power_ups: Vec::new(),
            width,
            height,
            tick: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.get(&id)
    }

    pub fn living(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.values().filter(|s| s.alive)
    }

    /// Movement rounds the next tick needs (fastest living snake)
    pub fn max_speed(&self) -> u32 {
        self.living()
            .map(|s| s.speed_multiplier)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Snakes ordered by score, best first, id breaking ties
    pub fn leaderboard(&self) -> Vec<&Snake> {
        let mut ranked: Vec<&Snake> = self.snakes.values().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        ranked
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
