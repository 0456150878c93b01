//! Fruit pool maintenance

use rand::Rng;

use crate::core::constants::FRUIT_POOL_SIZE;
use crate::core::types::Position;
use crate::entity::{PowerUp, Snake};
use crate::grid::Grid;
use crate::spawn::placement::random_free_position_avoiding;

/// Bring the pool back to exactly `FRUIT_POOL_SIZE`
///
/// Surviving fruit keep their order. Out-of-bounds and duplicate entries are
/// dropped, extras beyond the pool size are cut, and the remainder is filled
/// with free cells that avoid snakes, other fruit and power-ups.
pub fn top_up_fruits<'a, R: Rng + ?Sized>(
    fruits: Vec<Position>,
    grid: Grid,
    snakes: impl IntoIterator<Item = &'a Snake> + Clone,
    power_ups: &[PowerUp],
    rng: &mut R,
) -> Vec<Position> {
    let mut pool: Vec<Position> = Vec::with_capacity(FRUIT_POOL_SIZE);
    for fruit in fruits {
        if pool.len() == FRUIT_POOL_SIZE {
            break;
        }
        if grid.contains(fruit) && !pool.contains(&fruit) {
            pool.push(fruit);
        }
    }

    while pool.len() < FRUIT_POOL_SIZE {
        let mut blocked = pool.clone();
        blocked.extend(power_ups.iter().map(|p| p.position));
        let fruit = random_free_position_avoiding(grid, snakes.clone(), &blocked, rng);
        pool.push(fruit);
    }

    pool
}

/// Fruit closest to `from` (Manhattan), first in pool order on ties
pub fn nearest_fruit(from: Position, fruits: &[Position]) -> Option<Position> {
    fruits.iter().copied().min_by_key(|fruit| from.manhattan(fruit))
}
