//! Direction choice for autonomous snakes
//!
//! Strategies only read the pre-move snapshot through a `DecisionContext`;
//! the engine never knows which one it is driving.

pub mod cache;
pub mod flood_fill;
pub mod pathfinding;
pub mod scoring;
pub mod search;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::error::ArenaError;
use crate::core::types::{Direction, Position, SnakeId};
use crate::entity::Snake;
use crate::grid::{Grid, OccupancyGrid};

pub use cache::BoundedCache;
pub use scoring::ScoringStrategy;
pub use search::SearchStrategy;

/// Which strategy an engine drives its snakes with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Weighted per-direction scoring
    #[default]
    Scoring,
    /// A* towards the nearest fruit
    Search,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Scoring => write!(f, "scoring"),
            StrategyKind::Search => write!(f, "search"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scoring" => Ok(StrategyKind::Scoring),
            "search" | "astar" => Ok(StrategyKind::Search),
            other => Err(ArenaError::InvalidConfig(format!(
                "unknown strategy '{}', expected 'scoring' or 'search'",
                other
            ))),
        }
    }
}

/// Read-only view of the board a decision pass works from
pub struct DecisionContext<'a> {
    pub snakes: &'a BTreeMap<SnakeId, Snake>,
    pub fruits: &'a [Position],
    pub grid: Grid,
    /// Built from `snakes` once for the whole pass
    pub occupancy: OccupancyGrid,
}

impl<'a> DecisionContext<'a> {
    pub fn new(snakes: &'a BTreeMap<SnakeId, Snake>, fruits: &'a [Position], grid: Grid) -> Self {
        Self {
            snakes,
            fruits,
            grid,
            occupancy: OccupancyGrid::from_snakes(grid, snakes.values()),
        }
    }

    /// Heads of every other living snake
    pub fn other_heads(&self, self_id: SnakeId) -> impl Iterator<Item = Position> + '_ {
        self.snakes
            .values()
            .filter(move |s| s.alive && s.id != self_id)
            .map(Snake::head)
    }

    /// Directions whose next cell does not collide, in direction order
    pub fn safe_directions(&self, snake: &Snake) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.occupancy.is_colliding(snake.head().step(*d), snake.id))
            .collect()
    }
}

/// Picks the next direction for one snake
pub trait DirectionStrategy: Send {
    fn name(&self) -> &'static str;

    /// Called once before the decisions of a movement round
    fn begin_pass(&mut self) {}

    fn choose_direction(
        &mut self,
        ctx: &DecisionContext<'_>,
        snake: &Snake,
        rng: &mut ChaCha8Rng,
    ) -> Direction;
}

/// Strategy selected by `config.strategy`
pub fn make_strategy(config: &EngineConfig) -> Box<dyn DirectionStrategy> {
    match config.strategy {
        StrategyKind::Scoring => Box::new(ScoringStrategy::new(
            config.weights.clone(),
            config.cache_capacity,
        )),
        StrategyKind::Search => Box::new(SearchStrategy::new(config.weights.clone())),
    }
}

/// Random safe direction, or any direction when boxed in
pub(crate) fn fallback_direction(
    ctx: &DecisionContext<'_>,
    snake: &Snake,
    rng: &mut ChaCha8Rng,
) -> Direction {
    let safe = ctx.safe_directions(snake);
    if let Some(direction) = safe.choose(rng) {
        return *direction;
    }
    tracing::trace!("Snake {} has no safe move", snake.id);
    *Direction::ALL.choose(rng).unwrap_or(&snake.direction)
}
