//! Bounded flood fills used to judge room to maneuver

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::core::constants::MIN_BODY_LENGTH;
use crate::core::types::{Direction, Position, SnakeId};
use crate::entity::Snake;
use crate::grid::OccupancyGrid;

/// Depth-weighted count of cells reachable from `start`
///
/// `start` contributes `depth`, its free neighbours `depth - 1`, and so on
/// down to zero. Traversal only enters cells that would not collide for
/// `self_id`.
pub fn evaluate_space(
    start: Position,
    occupancy: &OccupancyGrid,
    self_id: SnakeId,
    depth: u32,
) -> i32 {
    if depth == 0 {
        return 0;
    }

    let grid = occupancy.grid();
    let mut visited: AHashSet<Position> = AHashSet::new();
    let mut queue: VecDeque<(Position, u32)> = VecDeque::new();
    let mut score = 0i32;

    visited.insert(start);
    queue.push_back((start, depth));

    while let Some((current, remaining)) = queue.pop_front() {
        score += remaining as i32;
        if remaining == 0 {
            continue;
        }
        for next in grid.neighbors(current) {
            if visited.contains(&next) || occupancy.is_colliding(next, self_id) {
                continue;
            }
            visited.insert(next);
            queue.push_back((next, remaining - 1));
        }
    }

    score
}

/// Free orthogonal neighbours of `pos` for `self_id`
pub fn open_neighbors(pos: Position, occupancy: &OccupancyGrid, self_id: SnakeId) -> usize {
    pos.neighbors()
        .into_iter()
        .filter(|n| !occupancy.is_colliding(*n, self_id))
        .count()
}

/// True if moving `snake` in `direction` leaves fewer than `min_cells`
/// reachable cells
///
/// The move is simulated: the new head blocks its cell and, unless the snake
/// is still growing, its tail cell frees up. The scan stops counting at
/// `scan_limit`, which is enough to tell "trapped" from "not trapped".
pub fn would_trap(
    snake: &Snake,
    direction: Direction,
    occupancy: &OccupancyGrid,
    min_cells: usize,
    scan_limit: usize,
) -> bool {
    let grid = occupancy.grid();
    let new_head = snake.head().step(direction);
    let tail = snake.tail();
    let last_segment = snake.len() - 1;
    let tail_moves = snake.len() >= MIN_BODY_LENGTH;

    let is_blocked = |cell: Position| -> bool {
        if cell == new_head {
            return true;
        }
        let occupants = occupancy.occupants(cell);
        if occupants.is_empty() {
            return false;
        }
        let only_own_tail = tail_moves
            && cell == tail
            && occupants
                .iter()
                .all(|o| o.snake == snake.id && o.segment == last_segment);
        !only_own_tail
    };

    let mut checked: AHashSet<Position> = AHashSet::new();
    let mut queue: VecDeque<Position> = VecDeque::new();
    let mut accessible = 0usize;

    checked.insert(new_head);
    queue.push_back(new_head);

    while let Some(current) = queue.pop_front() {
        if accessible >= scan_limit {
            break;
        }
        for next in grid.neighbors(current) {
            if checked.contains(&next) {
                continue;
            }
            checked.insert(next);
            if !is_blocked(next) {
                accessible += 1;
                queue.push_back(next);
            }
        }
    }

    accessible < min_cells
}
