//! Deciding and applying one movement round

use rand_chacha::ChaCha8Rng;

use crate::collision::find_head_on_collisions;
use crate::core::constants::MIN_BODY_LENGTH;
use crate::core::types::{Direction, Position, SnakeId};
use crate::decision::{DecisionContext, DirectionStrategy};
use crate::engine::events::{EliminationCause, TickEvent};
use crate::engine::respawn::respawn;
use crate::engine::state::GameState;
use crate::entity::Snake;

/// Step the head one cell, keeping the tail while the snake is still short
pub fn advance(snake: &mut Snake, direction: Direction) {
    let new_head = snake.head().step(direction);
    let growing = snake.len() < MIN_BODY_LENGTH;
    snake.body.insert(0, new_head);
    if !growing {
        snake.body.pop();
    }
    snake.direction = direction;
}

/// Move every living snake with `speed_multiplier > round`
///
/// All directions are chosen against the same pre-move snapshot before any
/// snake moves. Snakes that moved onto a shared head cell, or onto the head of
/// a snake sitting out the round, are marked dead for the collision pass.
/// Snakes leaving the grid respawn once every move of the round is done.
pub fn move_snakes(
    state: &mut GameState,
    round: u32,
    strategy: &mut dyn DirectionStrategy,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<TickEvent>,
) {
    let movers: Vec<SnakeId> = state
        .living()
        .filter(|s| s.speed_multiplier > round)
        .map(|s| s.id)
        .collect();
    if movers.is_empty() {
        return;
    }

    strategy.begin_pass();
    let decisions: Vec<(SnakeId, Direction)> = {
        let ctx = DecisionContext::new(&state.snakes, &state.fruits, state.grid());
        movers
            .iter()
            .filter_map(|id| state.snakes.get(id))
            .map(|snake| (snake.id, strategy.choose_direction(&ctx, snake, rng)))
            .collect()
    };

    let grid = state.grid();
    let mut advanced: Vec<SnakeId> = Vec::with_capacity(decisions.len());
    let mut wall_hits: Vec<SnakeId> = Vec::new();
    for (id, direction) in decisions {
        let Some(snake) = state.snakes.get_mut(&id) else {
            continue;
        };
        let from = snake.head();
        let to = from.step(direction);

        if !grid.contains(to) {
            tracing::debug!("Snake {} hit the wall at {}", id, to);
            events.push(TickEvent::Eliminated {
                snake: id,
                at: to,
                cause: EliminationCause::Wall,
            });
            wall_hits.push(id);
            continue;
        }

        advance(snake, direction);
        tracing::trace!("Snake {} moved {:?} to {}", id, direction, to);
        events.push(TickEvent::Moved { snake: id, from, to });
        advanced.push(id);
    }

    // Only heads that moved this round can meet; a resting head is a body hit
    let heads = advanced
        .iter()
        .filter_map(|id| state.snakes.get(id))
        .filter(|s| s.alive && !s.invulnerable)
        .map(|s| (s.id, s.head()));
    for id in find_head_on_collisions(heads) {
        if let Some(snake) = state.snakes.get_mut(&id) {
            snake.alive = false;
            tracing::debug!("Snake {} eliminated head-on at {}", id, snake.head());
            events.push(TickEvent::Eliminated {
                snake: id,
                at: snake.head(),
                cause: EliminationCause::HeadOn,
            });
        }
    }

    // A mover landing on a resting head ran into a body
    let resting: Vec<(SnakeId, Position)> = state
        .living()
        .filter(|s| !advanced.contains(&s.id) && !wall_hits.contains(&s.id))
        .map(|s| (s.id, s.head()))
        .collect();
    for id in &advanced {
        let Some(snake) = state.snakes.get_mut(id) else {
            continue;
        };
        if !snake.alive || snake.invulnerable {
            continue;
        }
        let head = snake.head();
        if resting.iter().any(|&(other, at)| other != *id && at == head) {
            snake.alive = false;
            tracing::debug!("Snake {} ran into a resting head at {}", id, head);
            events.push(TickEvent::Eliminated {
                snake: *id,
                at: head,
                cause: EliminationCause::Body,
            });
        }
    }

    // Respawn cells are picked against the finished round
    for id in wall_hits {
        respawn(state, id, rng, events);
    }
}
