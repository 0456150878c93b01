//! Power-ups: timed effects lying on the board or attached to a snake

use serde::{Deserialize, Serialize};

use crate::core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Extra move per tick
    Speed,
    /// Ignore body collisions
    Shield,
    /// Fruit worth more
    Multiplier,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Speed,
        PowerUpKind::Shield,
        PowerUpKind::Multiplier,
    ];
}

/// A power-up, either waiting on the board (`active == false`) or running on
/// a snake (`active == true`). `duration` counts remaining ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub position: Position,
    pub kind: PowerUpKind,
    pub active: bool,
    pub duration: u32,
}

impl PowerUp {
    pub fn on_board(kind: PowerUpKind, position: Position, duration: u32) -> Self {
        Self {
            position,
            kind,
            active: false,
            duration,
        }
    }

    pub fn collected(kind: PowerUpKind, position: Position, duration: u32) -> Self {
        Self {
            position,
            kind,
            active: true,
            duration,
        }
    }

    /// Count down one tick; true once the power-up has run out
    pub fn tick_down(&mut self) -> bool {
        self.duration = self.duration.saturating_sub(1);
        self.duration == 0
    }
}
