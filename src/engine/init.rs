//! Building the first state from startup configuration

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::engine::action::Action;
use crate::engine::reducer::Engine;
use crate::engine::state::GameState;
use crate::spawn::place_initial_snakes;

/// Initial state: a placed roster and a full fruit pool
///
/// Fails only on configuration the engine cannot start from.
pub fn new_game(config: &GameConfig, engine: &mut Engine) -> Result<GameState> {
    config.validate()?;

    let size = config.grid_size as i32;
    let state = GameState::new(size, size);
    let spawn = engine.config().spawn.clone();
    let snakes = place_initial_snakes(
        state.grid(),
        config.snake_count as usize,
        &spawn,
        engine.rng_mut(),
    );
    tracing::info!(
        "New game on {}x{} with {} of {} snakes",
        size,
        size,
        snakes.len(),
        config.snake_count
    );

    let state = engine.apply(&state, Action::InitSnakes(snakes));
    Ok(engine.apply(&state, Action::UpdateFruits(Vec::new())))
}
