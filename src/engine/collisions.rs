//! Post-move collision pass

use rand_chacha::ChaCha8Rng;

use crate::core::types::{Position, SnakeId};
use crate::engine::events::{EliminationCause, TickEvent};
use crate::engine::respawn::respawn;
use crate::engine::state::GameState;
use crate::grid::OccupancyGrid;

/// Respawn every snake that is already dead or whose head collides
///
/// Every verdict is taken against the same post-move roster before anyone
/// respawns. Shielded snakes ignore bodies but not walls.
pub fn check_collisions(state: &mut GameState, rng: &mut ChaCha8Rng, events: &mut Vec<TickEvent>) {
    let grid = state.grid();
    let occupancy = OccupancyGrid::from_snakes(grid, state.snakes.values());
    let eliminated: Vec<SnakeId> = state
        .snakes
        .values()
        .filter(|s| !s.alive)
        .map(|s| s.id)
        .collect();

    let doomed: Vec<(SnakeId, Option<EliminationCause>)> = state
        .snakes
        .values()
        .filter_map(|snake| {
            if !snake.alive {
                // Already reported when it was marked
                return Some((snake.id, None));
            }
            let head = snake.head();
            if !grid.contains(head) {
                return Some((snake.id, Some(EliminationCause::Wall)));
            }
            if !snake.invulnerable && struck(&occupancy, head, snake.id, &eliminated) {
                return Some((snake.id, Some(EliminationCause::Body)));
            }
            None
        })
        .collect();

    for (id, cause) in doomed {
        if let (Some(cause), Some(snake)) = (cause, state.snakes.get(&id)) {
            let at = snake.head();
            tracing::debug!("Snake {} eliminated at {} ({:?})", id, at, cause);
            events.push(TickEvent::Eliminated { snake: id, at, cause });
        }
        respawn(state, id, rng, events);
    }
}

/// Oracle verdict, except that the head of an already eliminated snake is
/// not an obstacle: it either died head-on or ran into the head it rests on
fn struck(
    occupancy: &OccupancyGrid,
    head: Position,
    self_id: SnakeId,
    eliminated: &[SnakeId],
) -> bool {
    occupancy.is_colliding(head, self_id)
        && occupancy.occupants(head).iter().any(|o| {
            let own_head = o.snake == self_id && o.segment == 0;
            let dead_head = o.segment == 0 && eliminated.contains(&o.snake);
            !own_head && !dead_head
        })
}
