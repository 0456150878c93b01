//! Free-cell sampling

use ahash::AHashSet;
use rand::Rng;

use crate::core::constants::SPAWN_ATTEMPTS;
use crate::core::types::Position;
use crate::entity::Snake;
use crate::grid::Grid;

/// A cell not covered by any snake segment
///
/// Samples uniformly for a bounded number of attempts, then scans the grid
/// row by row for the first free cell. On a saturated grid the last sample
/// is returned instead of failing.
pub fn random_free_position<'a, R: Rng + ?Sized>(
    grid: Grid,
    snakes: impl IntoIterator<Item = &'a Snake>,
    rng: &mut R,
) -> Position {
    random_free_position_avoiding(grid, snakes, &[], rng)
}

/// Like `random_free_position`, also keeping clear of `blocked` cells
pub fn random_free_position_avoiding<'a, R: Rng + ?Sized>(
    grid: Grid,
    snakes: impl IntoIterator<Item = &'a Snake>,
    blocked: &[Position],
    rng: &mut R,
) -> Position {
    if grid.cell_count() == 0 {
        tracing::warn!("Spawn requested on an empty {}x{} grid", grid.width, grid.height);
        return Position::default();
    }

    let mut occupied: AHashSet<Position> = blocked.iter().copied().collect();
    for snake in snakes {
        occupied.extend(snake.body.iter().copied());
    }

    let mut sample = Position::default();
    for _ in 0..SPAWN_ATTEMPTS {
        sample = Position::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
        if !occupied.contains(&sample) {
            return sample;
        }
    }

    if let Some(free) = grid.cells().find(|cell| !occupied.contains(cell)) {
        return free;
    }

    tracing::warn!(
        "Grid {}x{} is saturated, spawning on occupied cell {}",
        grid.width,
        grid.height,
        sample
    );
    sample
}
