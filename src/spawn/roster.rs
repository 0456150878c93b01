//! Initial snake placement

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::SpawnConfig;
use crate::core::constants::SPAWN_ATTEMPTS;
use crate::core::types::{Direction, Position, SnakeId};
use crate::entity::Snake;
use crate::grid::Grid;

/// Evenly spaced hues, one per snake
pub fn generate_colors(count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let hue_step = 360.0 / count as f32;
    (0..count)
        .map(|i| format!("hsl({}, 100%, 50%)", i as f32 * hue_step))
        .collect()
}

/// A direction whose first step stays inside the grid
pub fn safe_initial_direction<R: Rng + ?Sized>(grid: Grid, pos: Position, rng: &mut R) -> Direction {
    grid.directions_inside(pos)
        .choose(rng)
        .copied()
        .unwrap_or(Direction::Right)
}

/// Place up to `count` single-segment snakes away from walls and each other
///
/// Each snake gets a bounded number of attempts; one that cannot be placed is
/// skipped. If nobody fits, a single snake is placed at the grid center so
/// the roster is never empty.
pub fn place_initial_snakes<R: Rng + ?Sized>(
    grid: Grid,
    count: usize,
    config: &SpawnConfig,
    rng: &mut R,
) -> Vec<Snake> {
    let colors = generate_colors(count.max(1));
    let margin_x = (config.edge_margin as i32).min(grid.width / 4);
    let margin_y = (config.edge_margin as i32).min(grid.height / 4);
    let mut placed: Vec<Position> = Vec::with_capacity(count);
    let mut snakes: Vec<Snake> = Vec::with_capacity(count);

    for index in 0..count {
        let mut found = None;
        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = Position::new(
                rng.gen_range(margin_x..grid.width - margin_x),
                rng.gen_range(margin_y..grid.height - margin_y),
            );
            let separated = placed
                .iter()
                .all(|other| other.chebyshev(&candidate) > config.min_separation);
            if separated {
                found = Some(candidate);
                break;
            }
        }

        let Some(position) = found else {
            tracing::warn!(
                "Could not place snake {} of {} on a {}x{} grid",
                index + 1,
                count,
                grid.width,
                grid.height
            );
            continue;
        };

        let id = SnakeId(snakes.len() as u32);
        let direction = safe_initial_direction(grid, position, rng);
        placed.push(position);
        snakes.push(Snake::new(id, position, direction, colors[index].clone()));
        tracing::debug!("Snake {} placed at {} heading {:?}", id, position, direction);
    }

    if snakes.is_empty() {
        let center = grid.center();
        tracing::warn!("No snake could be placed, falling back to center {}", center);
        let direction = safe_initial_direction(grid, center, rng);
        snakes.push(Snake::new(SnakeId(0), center, direction, colors[0].clone()));
    }

    snakes
}
