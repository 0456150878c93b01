//! Core type definitions used throughout the codebase

use derive_more::{Add, Display, From, Sub};
use serde::{Deserialize, Serialize};

/// Stable identifier for a snake
///
/// Assigned once at initialization and kept across respawns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
pub struct SnakeId(pub u32);

/// Simulation tick counter
pub type Tick = u64;

/// Integer grid coordinate
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Add, Sub,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by taking one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// King-move distance (8-neighbourhood)
    pub fn chebyshev(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order
    pub fn neighbors(&self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal movement direction
///
/// `ALL` fixes the evaluation order; wherever a "first" direction is needed
/// (score ties, fallbacks) this order decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit vector (dx, dy); y grows downwards
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| from.step(*d) == to)
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Right
    }
}
