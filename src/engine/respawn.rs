//! Bringing eliminated snakes back

use rand::Rng;

use crate::core::constants::RESPAWN_PENALTY;
use crate::core::types::SnakeId;
use crate::engine::events::TickEvent;
use crate::engine::state::GameState;
use crate::spawn::{random_free_position, safe_initial_direction};

/// Reset snake `id` to a single segment on a free cell
///
/// Keeps the id and color, takes the score penalty (floored at zero) and
/// clears every running effect.
pub fn respawn<R: Rng + ?Sized>(
    state: &mut GameState,
    id: SnakeId,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let grid = state.grid();
    // The snake's own cells are vacated by the reset
    let others = state.snakes.values().filter(|s| s.id != id);
    let position = random_free_position(grid, others, rng);
    let direction = safe_initial_direction(grid, position, rng);

    let Some(snake) = state.snakes.get_mut(&id) else {
        return;
    };
    snake.body = vec![position];
    snake.direction = direction;
    snake.alive = true;
    snake.score = snake.score.saturating_sub(RESPAWN_PENALTY);
    snake.power_ups.clear();
    snake.speed_multiplier = 1;
    snake.invulnerable = false;

    tracing::debug!("Snake {} respawned at {} with score {}", id, position, snake.score);
    events.push(TickEvent::Respawned {
        snake: id,
        at: position,
        score: snake.score,
    });
}
