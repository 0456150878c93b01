//! Grid extents and wall checks

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Position};

/// Rectangular playfield `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if `pos` lies inside the walls
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Every cell, row by row (y outer, x inner)
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Directions from `pos` whose next cell is still inside the grid
    pub fn directions_inside(&self, pos: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.contains(pos.step(*d)))
            .collect()
    }

    /// In-bounds orthogonal neighbours of `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().into_iter().filter(move |n| self.contains(*n))
    }
}
