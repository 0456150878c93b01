//! One full simulation tick

use serde::{Deserialize, Serialize};

use crate::engine::action::Action;
use crate::engine::events::TickEvent;
use crate::engine::reducer::Engine;
use crate::engine::state::GameState;

/// New state plus everything that happened on the way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub state: GameState,
    pub events: Vec<TickEvent>,
}

impl Engine {
    /// Advance the whole simulation by one tick
    pub fn step(&mut self, state: &GameState) -> GameState {
        self.step_with_events(state).state
    }

    /// Movement rounds (one per speed level), then effect countdown and
    /// power-up spawning
    pub fn step_with_events(&mut self, state: &GameState) -> TickReport {
        let mut next = state.clone();
        let mut events = Vec::new();

        let rounds = next.max_speed();
        for round in 0..rounds {
            for action in [
                Action::MoveSnakes { round },
                Action::CheckCollisions,
                Action::CheckFruitConsumption,
                Action::CheckPowerUps,
            ] {
                self.reduce(&mut next, action, &mut events);
            }
        }
        self.reduce(&mut next, Action::ExpireEffects, &mut events);
        self.reduce(&mut next, Action::SpawnPowerUp, &mut events);
        next.tick += 1;

        tracing::trace!("Tick {} produced {} events", next.tick, events.len());
        TickReport {
            state: next,
            events,
        }
    }
}

/// Run `ticks` ticks back to back, returning the final state
pub fn run_ticks(engine: &mut Engine, state: GameState, ticks: u64) -> GameState {
    (0..ticks).fold(state, |current, _| engine.step(&current))
}
