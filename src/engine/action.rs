//! Transitions the engine understands
//!
//! Actions travel as JSON between collaborators, e.g.
//! `{"type": "MOVE_SNAKES", "payload": {"round": 0}}`.

use serde::{Deserialize, Serialize};

use crate::core::types::Position;
use crate::entity::{PowerUp, Snake};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the roster
    InitSnakes(Vec<Snake>),
    /// Decide and advance every living snake faster than `round`
    MoveSnakes { round: u32 },
    /// Respawn snakes that are dead or whose head collides
    CheckCollisions,
    /// Score and grow snakes whose head sits on fruit
    CheckFruitConsumption,
    /// Pick up board power-ups under a head
    #[serde(rename = "CHECK_POWERUPS")]
    CheckPowerUps,
    /// Count down board power-ups and running effects
    ExpireEffects,
    /// Roll for a new board power-up
    #[serde(rename = "SPAWN_POWERUP")]
    SpawnPowerUp,
    #[serde(rename = "ADD_POWERUP")]
    AddPowerUp(PowerUp),
    /// Replace the board power-ups
    #[serde(rename = "UPDATE_POWERUPS")]
    UpdatePowerUps(Vec<PowerUp>),
    /// Replace the fruit pool, then top up to the pool size
    UpdateFruits(Vec<Position>),
    UpdateDimensions { width: i32, height: i32 },
    /// Anything not listed above; leaves the state unchanged
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Wire name, as found in the `type` field
    pub fn name(&self) -> &'static str {
        match self {
            Action::InitSnakes(_) => "INIT_SNAKES",
            Action::MoveSnakes { .. } => "MOVE_SNAKES",
            Action::CheckCollisions => "CHECK_COLLISIONS",
            Action::CheckFruitConsumption => "CHECK_FRUIT_CONSUMPTION",
            Action::CheckPowerUps => "CHECK_POWERUPS",
            Action::ExpireEffects => "EXPIRE_EFFECTS",
            Action::SpawnPowerUp => "SPAWN_POWERUP",
            Action::AddPowerUp(_) => "ADD_POWERUP",
            Action::UpdatePowerUps(_) => "UPDATE_POWERUPS",
            Action::UpdateFruits(_) => "UPDATE_FRUITS",
            Action::UpdateDimensions { .. } => "UPDATE_DIMENSIONS",
            Action::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde_tags() {
        let actions = vec![
            Action::MoveSnakes { round: 1 },
            Action::CheckCollisions,
            Action::CheckFruitConsumption,
            Action::CheckPowerUps,
            Action::SpawnPowerUp,
            Action::UpdateFruits(vec![Position::new(1, 2)]),
            Action::UpdateDimensions { width: 5, height: 6 },
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.name());
        }
    }

    #[test]
    fn test_parses_payloads() {
        let action: Action =
            serde_json::from_str(r#"{"type":"MOVE_SNAKES","payload":{"round":1}}"#).unwrap();
        assert_eq!(action, Action::MoveSnakes { round: 1 });

        let action: Action = serde_json::from_str(
            r#"{"type":"UPDATE_DIMENSIONS","payload":{"width":20,"height":15}}"#,
        )
        .unwrap();
        assert_eq!(action, Action::UpdateDimensions { width: 20, height: 15 });
    }

    #[test]
    fn test_unknown_type_is_tolerated() {
        let action: Action = serde_json::from_str(r#"{"type":"RESET_GAME"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }
}
