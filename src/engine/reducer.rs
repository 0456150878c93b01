//! The engine: owns configuration, strategy and randomness, and turns
//! `(state, action)` into a new state

use std::mem;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::decision::{make_strategy, DirectionStrategy};
use crate::engine::action::Action;
use crate::engine::collisions::check_collisions;
use crate::engine::consumption::consume_fruit;
use crate::engine::effects::{
    add_power_up, collect_power_ups, expire_effects, replace_power_ups, spawn_power_up,
};
use crate::engine::events::TickEvent;
use crate::engine::movement::move_snakes;
use crate::engine::state::GameState;
use crate::entity::Snake;
use crate::spawn::top_up_fruits;

pub struct Engine {
    config: EngineConfig,
    strategy: Box<dyn DirectionStrategy>,
    rng: ChaCha8Rng,
}

impl Engine {
    /// Engine seeded from OS entropy
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Reproducible engine: same seed, same inputs, same states
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Rejects configs the tick loop cannot run with
    pub fn with_rng(config: EngineConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let strategy = make_strategy(&config);
        Ok(Self {
            config,
            strategy,
            rng,
        })
    }

    /// Swap in a custom strategy
    pub fn with_strategy(mut self, strategy: Box<dyn DirectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Apply one action; `state` is left untouched
    pub fn apply(&mut self, state: &GameState, action: Action) -> GameState {
        self.apply_with_events(state, action).0
    }

    pub fn apply_with_events(&mut self, state: &GameState, action: Action) -> (GameState, Vec<TickEvent>) {
        let mut next = state.clone();
        let mut events = Vec::new();
        self.reduce(&mut next, action, &mut events);
        (next, events)
    }

    pub(crate) fn reduce(&mut self, state: &mut GameState, action: Action, events: &mut Vec<TickEvent>) {
        match action {
            Action::InitSnakes(snakes) => init_snakes(state, snakes),
            Action::MoveSnakes { round } => {
                move_snakes(state, round, self.strategy.as_mut(), &mut self.rng, events)
            }
            Action::CheckCollisions => check_collisions(state, &mut self.rng, events),
            Action::CheckFruitConsumption => consume_fruit(
                state,
                self.config.power_ups.score_multiplier,
                &mut self.rng,
                events,
            ),
            Action::CheckPowerUps => collect_power_ups(state, &self.config.power_ups, events),
            Action::ExpireEffects => expire_effects(state, &self.config.power_ups, events),
            Action::SpawnPowerUp => {
                spawn_power_up(state, &self.config.power_ups, &mut self.rng, events)
            }
            Action::AddPowerUp(power_up) => add_power_up(state, power_up),
            Action::UpdatePowerUps(power_ups) => replace_power_ups(state, power_ups),
            Action::UpdateFruits(fruits) => {
                state.fruits = top_up_fruits(
                    fruits,
                    state.grid(),
                    state.snakes.values(),
                    &state.power_ups,
                    &mut self.rng,
                );
            }
            Action::UpdateDimensions { width, height } => self.resize(state, width, height),
            Action::Unknown => {
                tracing::debug!("Ignoring unknown action");
            }
        }
    }

    /// Change the board size; snakes left outside are caught by the next
    /// collision pass
    fn resize(&mut self, state: &mut GameState, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            tracing::warn!("Ignoring invalid dimensions {}x{}", width, height);
            return;
        }
        state.width = width;
        state.height = height;

        let grid = state.grid();
        state.power_ups.retain(|p| grid.contains(p.position));
        let pool = mem::take(&mut state.fruits);
        state.fruits = top_up_fruits(pool, grid, state.snakes.values(), &state.power_ups, &mut self.rng);
    }
}

fn init_snakes(state: &mut GameState, snakes: Vec<Snake>) {
    state.snakes.clear();
    for snake in snakes {
        if snake.is_empty() {
            tracing::warn!("Dropping snake {} with an empty body", snake.id);
            continue;
        }
        state.snakes.insert(snake.id, snake);
    }
}
