//! A* towards the nearest fruit, with a safe-move fallback

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::config::HeuristicWeights;
use crate::core::types::Direction;
use crate::decision::flood_fill::{open_neighbors, would_trap};
use crate::decision::pathfinding::find_path;
use crate::decision::{fallback_direction, DecisionContext, DirectionStrategy};
use crate::entity::Snake;
use crate::spawn::nearest_fruit;

pub struct SearchStrategy {
    weights: HeuristicWeights,
}

impl SearchStrategy {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    /// First step of the shortest safe path to the nearest fruit
    pub fn path_step(&self, ctx: &DecisionContext<'_>, snake: &Snake) -> Option<Direction> {
        let head = snake.head();
        let target = nearest_fruit(head, ctx.fruits)?;
        let path = find_path(ctx.grid, head, target, |cell| {
            ctx.occupancy.is_colliding(cell, snake.id)
        })?;
        let next = *path.get(1)?;
        Direction::between(head, next)
    }

    /// Best safe direction by free room around the new cell
    pub fn safe_move(
        &self,
        ctx: &DecisionContext<'_>,
        snake: &Snake,
        rng: &mut ChaCha8Rng,
    ) -> Option<Direction> {
        let scored: Vec<(Direction, i32)> = ctx
            .safe_directions(snake)
            .into_iter()
            .map(|direction| {
                let next = snake.head().step(direction);
                let mut score = 2 * open_neighbors(next, &ctx.occupancy, snake.id) as i32;
                if would_trap(
                    snake,
                    direction,
                    &ctx.occupancy,
                    self.weights.trap_min_cells,
                    self.weights.trap_scan_limit,
                ) {
                    score -= 10;
                }
                (direction, score)
            })
            .collect();

        let top = scored.iter().map(|(_, score)| *score).max()?;
        let best: Vec<Direction> = scored
            .into_iter()
            .filter(|(_, score)| *score == top)
            .map(|(direction, _)| direction)
            .collect();
        best.choose(rng).copied()
    }
}

impl DirectionStrategy for SearchStrategy {
    fn name(&self) -> &'static str {
        "search"
    }

    fn choose_direction(
        &mut self,
        ctx: &DecisionContext<'_>,
        snake: &Snake,
        rng: &mut ChaCha8Rng,
    ) -> Direction {
        if let Some(direction) = self.path_step(ctx, snake) {
            return direction;
        }
        tracing::trace!("Snake {} has no path to fruit", snake.id);
        self.safe_move(ctx, snake, rng)
            .unwrap_or_else(|| fallback_direction(ctx, snake, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Position, SnakeId};
    use crate::grid::Grid;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn roster(snakes: Vec<Snake>) -> BTreeMap<SnakeId, Snake> {
        snakes.into_iter().map(|s| (s.id, s)).collect()
    }

    #[test]
    fn test_heads_straight_for_fruit() {
        let me = Snake::new(SnakeId(0), Position::new(2, 2), Direction::Right, "");
        let snakes = roster(vec![me.clone()]);
        let fruits = [Position::new(2, 7), Position::new(9, 9)];
        let ctx = DecisionContext::new(&snakes, &fruits, Grid::new(10, 10));
        let mut strategy = SearchStrategy::new(HeuristicWeights::default());
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(strategy.choose_direction(&ctx, &me, &mut rng), Direction::Down);
    }

    #[test]
    fn test_routes_around_bodies() {
        let me = Snake::new(SnakeId(0), Position::new(0, 2), Direction::Right, "");
        // Wall of another snake along x = 1, open at y = 4
        let blocker = Snake::with_body(
            SnakeId(1),
            (0..4).map(|y| Position::new(1, y)).collect(),
            Direction::Down,
        );
        let snakes = roster(vec![me.clone(), blocker]);
        let fruits = [Position::new(2, 2)];
        let ctx = DecisionContext::new(&snakes, &fruits, Grid::new(5, 5));
        let strategy = SearchStrategy::new(HeuristicWeights::default());

        assert_eq!(strategy.path_step(&ctx, &me), Some(Direction::Down));
    }

    #[test]
    fn test_unreachable_fruit_falls_back_to_safe_move() {
        let me = Snake::new(SnakeId(0), Position::new(0, 0), Direction::Right, "");
        // Fruit sealed off in the far corner
        let sealer = Snake::with_body(
            SnakeId(1),
            vec![Position::new(3, 4), Position::new(3, 3), Position::new(4, 3)],
            Direction::Up,
        );
        let snakes = roster(vec![me.clone(), sealer]);
        let fruits = [Position::new(4, 4)];
        let ctx = DecisionContext::new(&snakes, &fruits, Grid::new(5, 5));
        let mut strategy = SearchStrategy::new(HeuristicWeights::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        assert!(strategy.path_step(&ctx, &me).is_none());
        let direction = strategy.choose_direction(&ctx, &me, &mut rng);
        assert!(matches!(direction, Direction::Right | Direction::Down));
    }
}
