//! Probabilistic power-up spawning

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::PowerUpConfig;
use crate::core::constants::MAX_POWERUPS;
use crate::core::types::Position;
use crate::entity::{PowerUp, PowerUpKind, Snake};
use crate::grid::Grid;
use crate::spawn::placement::random_free_position_avoiding;

/// Roll for a new board power-up
///
/// Returns `None` when the board is at capacity or the roll misses.
pub fn maybe_spawn_power_up<'a, R: Rng + ?Sized>(
    power_ups: &[PowerUp],
    grid: Grid,
    snakes: impl IntoIterator<Item = &'a Snake>,
    fruits: &[Position],
    config: &PowerUpConfig,
    rng: &mut R,
) -> Option<PowerUp> {
    if power_ups.len() >= MAX_POWERUPS {
        return None;
    }
    if !rng.gen_bool(config.spawn_chance) {
        return None;
    }

    let kind = *PowerUpKind::ALL.choose(rng)?;
    let mut blocked: Vec<Position> = fruits.to_vec();
    blocked.extend(power_ups.iter().map(|p| p.position));
    let position = random_free_position_avoiding(grid, snakes, &blocked, rng);

    Some(PowerUp::on_board(kind, position, config.duration_ticks))
}
