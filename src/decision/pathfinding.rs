//! A* over grid cells
//!
//! Uniform step cost, Manhattan heuristic. Callers decide which cells are
//! blocked; the start cell is never checked.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashMap;

use crate::core::types::Position;
use crate::grid::Grid;

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    pos: Position,
    f_cost: u32, // g_cost + heuristic
    h_cost: u32,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap, closer-to-goal first on ties
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.h_cost.cmp(&self.h_cost))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `goal`, both ends included
///
/// Returns None if no path exists.
pub fn find_path(
    grid: Grid,
    start: Position,
    goal: Position,
    is_blocked: impl Fn(Position) -> bool,
) -> Option<Vec<Position>> {
    if start == goal {
        return Some(vec![start]);
    }
    if !grid.contains(goal) || is_blocked(goal) {
        return None;
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<Position, Position> = AHashMap::new();
    let mut g_scores: AHashMap<Position, u32> = AHashMap::new();

    g_scores.insert(start, 0);
    let h = start.manhattan(&goal);
    open_set.push(PathNode {
        pos: start,
        f_cost: h,
        h_cost: h,
    });

    while let Some(current) = open_set.pop() {
        if current.pos == goal {
            return Some(reconstruct_path(&came_from, current.pos));
        }

        let current_g = g_scores.get(&current.pos).copied().unwrap_or(u32::MAX);
        if current.f_cost > current_g.saturating_add(current.h_cost) {
            // Stale entry, a cheaper route was queued later
            continue;
        }

        for neighbor in grid.neighbors(current.pos) {
            if is_blocked(neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.pos);
                g_scores.insert(neighbor, tentative_g);

                let h_cost = neighbor.manhattan(&goal);
                open_set.push(PathNode {
                    pos: neighbor,
                    f_cost: tentative_g + h_cost,
                    h_cost,
                });
            }
        }
    }

    None
}

fn reconstruct_path(came_from: &AHashMap<Position, Position>, mut current: Position) -> Vec<Position> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
