//! Weighted per-direction scoring
//!
//! Every direction is scored against the pre-move snapshot; colliding moves
//! are eliminated outright and the best of the rest wins, earliest direction
//! first on ties.

use rand_chacha::ChaCha8Rng;

use crate::core::config::HeuristicWeights;
use crate::core::types::{Direction, Position, SnakeId};
use crate::decision::cache::BoundedCache;
use crate::decision::flood_fill::{evaluate_space, would_trap};
use crate::decision::{fallback_direction, DecisionContext, DirectionStrategy};
use crate::entity::Snake;
use crate::spawn::nearest_fruit;

pub struct ScoringStrategy {
    weights: HeuristicWeights,
    /// Flood-fill results for the current pass, keyed by snake and cell
    space_cache: BoundedCache<(SnakeId, Position), i32>,
}

impl ScoringStrategy {
    pub fn new(weights: HeuristicWeights, cache_capacity: usize) -> Self {
        Self {
            weights,
            space_cache: BoundedCache::new(cache_capacity),
        }
    }

    /// Score of moving `snake` one step in `direction`
    ///
    /// `None` for a move that collides outright.
    pub fn score_direction(
        &mut self,
        ctx: &DecisionContext<'_>,
        snake: &Snake,
        direction: Direction,
        target: Option<Position>,
    ) -> Option<i32> {
        let head = snake.head();
        let next = head.step(direction);
        if ctx.occupancy.is_colliding(next, snake.id) {
            return None;
        }

        let w = &self.weights;
        let mut score = 0i32;

        if ctx.other_heads(snake.id).any(|h| h.chebyshev(&next) <= 1) {
            score -= w.head_risk_penalty;
        }

        let depth = w.flood_depth;
        let space = self
            .space_cache
            .get_or_insert_with((snake.id, next), || {
                evaluate_space(next, &ctx.occupancy, snake.id, depth)
            });
        score += w.space_weight * space;

        if let Some(fruit) = target {
            if space > w.space_threshold && next.manhattan(&fruit) < head.manhattan(&fruit) {
                score += w.fruit_bonus;
            }
        }

        if would_trap(snake, direction, &ctx.occupancy, w.trap_min_cells, w.trap_scan_limit) {
            score -= w.trap_penalty;
        }

        let spacing = ctx
            .other_heads(snake.id)
            .map(|h| h.manhattan(&next))
            .min()
            .unwrap_or(0);
        score += w.spacing_weight * spacing as i32;

        Some(score)
    }
}

impl DirectionStrategy for ScoringStrategy {
    fn name(&self) -> &'static str {
        "scoring"
    }

    fn begin_pass(&mut self) {
        self.space_cache.clear();
    }

    fn choose_direction(
        &mut self,
        ctx: &DecisionContext<'_>,
        snake: &Snake,
        rng: &mut ChaCha8Rng,
    ) -> Direction {
        let target = nearest_fruit(snake.head(), ctx.fruits);
        let mut best: Option<(Direction, i32)> = None;

        for direction in Direction::ALL {
            let Some(score) = self.score_direction(ctx, snake, direction, target) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((direction, score));
            }
        }

        match best {
            Some((direction, score)) => {
                tracing::trace!("Snake {} scores {:?} at {}", snake.id, direction, score);
                direction
            }
            None => fallback_direction(ctx, snake, rng),
        }
    }
}
