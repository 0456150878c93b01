//! Fruit eating

use std::mem;

use rand_chacha::ChaCha8Rng;

use crate::core::constants::FRUIT_SCORE;
use crate::engine::events::TickEvent;
use crate::engine::state::GameState;
use crate::entity::PowerUpKind;
use crate::spawn::top_up_fruits;

/// Score and grow every living snake whose head is on fruit, then refill the pool
///
/// Growth duplicates the tail segment so the extra length shows up on the
/// next move.
pub fn consume_fruit(
    state: &mut GameState,
    score_multiplier: u32,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<TickEvent>,
) {
    let fruits = &mut state.fruits;
    for snake in state.snakes.values_mut().filter(|s| s.alive) {
        let head = snake.head();
        let Some(index) = fruits.iter().position(|f| *f == head) else {
            continue;
        };
        fruits.remove(index);

        let points = if snake.has_effect(PowerUpKind::Multiplier) {
            FRUIT_SCORE * score_multiplier
        } else {
            FRUIT_SCORE
        };
        snake.score += points;
        let tail = snake.tail();
        snake.body.push(tail);

        tracing::debug!("Snake {} ate fruit at {} (+{})", snake.id, head, points);
        events.push(TickEvent::FruitEaten {
            snake: snake.id,
            at: head,
            points,
        });
    }

    let grid = state.grid();
    let pool = mem::take(&mut state.fruits);
    state.fruits = top_up_fruits(pool, grid, state.snakes.values(), &state.power_ups, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::FRUIT_POOL_SIZE;
    use crate::core::types::{Direction, Position, SnakeId};
    use crate::entity::{PowerUp, Snake};
    use rand::SeedableRng;

    #[test]
    fn test_multiplier_doubles_points() {
        let mut state = GameState::new(10, 10);
        let mut snake = Snake::new(SnakeId(0), Position::new(3, 3), Direction::Right, "");
        snake
            .power_ups
            .push(PowerUp::collected(PowerUpKind::Multiplier, Position::new(0, 0), 10));
        state.snakes.insert(snake.id, snake);
        state.fruits = vec![Position::new(3, 3)];
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut events = Vec::new();

        consume_fruit(&mut state, 2, &mut rng, &mut events);

        let snake = &state.snakes[&SnakeId(0)];
        assert_eq!(snake.score, 20);
        assert_eq!(snake.len(), 2);
        assert_eq!(state.fruits.len(), FRUIT_POOL_SIZE);
        assert!(!state.fruits.contains(&Position::new(3, 3)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_dead_snakes_do_not_eat() {
        let mut state = GameState::new(10, 10);
        let mut snake = Snake::new(SnakeId(0), Position::new(3, 3), Direction::Right, "");
        snake.alive = false;
        state.snakes.insert(snake.id, snake);
        state.fruits = vec![Position::new(3, 3), Position::new(1, 1), Position::new(8, 8)];
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        consume_fruit(&mut state, 2, &mut rng, &mut Vec::new());
        assert_eq!(state.snakes[&SnakeId(0)].score, 0);
        assert_eq!(
            state.fruits,
            vec![Position::new(3, 3), Position::new(1, 1), Position::new(8, 8)]
        );
    }
}
