//! Snake agent state

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Position, SnakeId};
use crate::entity::powerup::{PowerUp, PowerUpKind};

/// An autonomous agent on the grid
///
/// `body[0]` is the head and the last element is the tail. The body is never
/// empty; every constructor and every engine transition preserves that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub id: SnakeId,
    pub body: Vec<Position>,
    /// Last direction applied
    pub direction: Direction,
    /// CSS color string, only meaningful to the renderer
    pub color: String,
    pub score: u32,
    pub alive: bool,
    /// Collected effects that are still running
    pub power_ups: Vec<PowerUp>,
    pub speed_multiplier: u32,
    pub invulnerable: bool,
}

impl Snake {
    /// Single-segment snake at `start`
    pub fn new(id: SnakeId, start: Position, direction: Direction, color: impl Into<String>) -> Self {
        Self {
            id,
            body: vec![start],
            direction,
            color: color.into(),
            score: 0,
            alive: true,
            power_ups: Vec::new(),
            speed_multiplier: 1,
            invulnerable: false,
        }
    }

    /// Snake with an explicit body, head first
    ///
    /// Mostly useful for scripted scenarios and tests.
    pub fn with_body(id: SnakeId, body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake body must have a head");
        Self {
            body,
            ..Self::new(id, Position::default(), direction, String::new())
        }
    }

    #[inline]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    #[inline]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn has_effect(&self, kind: PowerUpKind) -> bool {
        self.power_ups.iter().any(|p| p.kind == kind)
    }

    /// Re-derive `speed_multiplier` and `invulnerable` from the active effects
    pub fn refresh_effect_flags(&mut self, speed_multiplier: u32) {
        self.speed_multiplier = if self.has_effect(PowerUpKind::Speed) {
            speed_multiplier
        } else {
            1
        };
        self.invulnerable = self.has_effect(PowerUpKind::Shield);
    }
}
