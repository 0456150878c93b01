//! Wall and body collision oracle

use serde::{Deserialize, Serialize};

use crate::core::types::{Position, SnakeId};
use crate::entity::Snake;
use crate::grid::Grid;

/// What a queried cell runs into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall,
    /// A segment of the probing snake other than its head
    OwnBody,
    /// Any segment of another snake
    Snake(SnakeId),
}

/// Classify a query of `pos` on behalf of snake `self_id`
///
/// The probing snake's own head is exempt so that its current cell can be
/// queried without self-colliding. Every other segment counts, including the
/// probing snake's torso and tail.
pub fn collision_at<'a>(
    pos: Position,
    snakes: impl IntoIterator<Item = &'a Snake>,
    grid: Grid,
    self_id: SnakeId,
) -> Option<CollisionKind> {
    if !grid.contains(pos) {
        return Some(CollisionKind::Wall);
    }

    for snake in snakes {
        let own = snake.id == self_id;
        let hit = snake
            .body
            .iter()
            .enumerate()
            .any(|(index, segment)| *segment == pos && !(own && index == 0));
        if hit {
            return Some(if own {
                CollisionKind::OwnBody
            } else {
                CollisionKind::Snake(snake.id)
            });
        }
    }

    None
}

/// True if `pos` is a wall or any body segment except the querying snake's own head
pub fn is_colliding<'a>(
    pos: Position,
    snakes: impl IntoIterator<Item = &'a Snake>,
    width: i32,
    height: i32,
    self_id: SnakeId,
) -> bool {
    collision_at(pos, snakes, Grid::new(width, height), self_id).is_some()
}
