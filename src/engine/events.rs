//! What happened during a tick

use serde::{Deserialize, Serialize};

use crate::core::types::{Position, SnakeId};
use crate::entity::PowerUpKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    Wall,
    /// Ran into a body segment, its own or another snake's
    Body,
    /// Shared a post-move head cell with another snake
    HeadOn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    Moved {
        snake: SnakeId,
        from: Position,
        to: Position,
    },
    Eliminated {
        snake: SnakeId,
        at: Position,
        cause: EliminationCause,
    },
    Respawned {
        snake: SnakeId,
        at: Position,
        /// Score after the penalty
        score: u32,
    },
    FruitEaten {
        snake: SnakeId,
        at: Position,
        points: u32,
    },
    PowerUpSpawned {
        kind: PowerUpKind,
        at: Position,
    },
    PowerUpCollected {
        snake: SnakeId,
        kind: PowerUpKind,
        at: Position,
    },
    /// A running effect (`snake` set) or a board power-up (`snake` empty) ran out
    EffectExpired {
        snake: Option<SnakeId>,
        kind: PowerUpKind,
    },
}

impl TickEvent {
    /// Snake the event is about, if any
    pub fn snake(&self) -> Option<SnakeId> {
        match self {
            TickEvent::Moved { snake, .. }
            | TickEvent::Eliminated { snake, .. }
            | TickEvent::Respawned { snake, .. }
            | TickEvent::FruitEaten { snake, .. }
            | TickEvent::PowerUpCollected { snake, .. } => Some(*snake),
            TickEvent::EffectExpired { snake, .. } => *snake,
            TickEvent::PowerUpSpawned { .. } => None,
        }
    }
}
