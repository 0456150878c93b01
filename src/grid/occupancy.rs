//! Cell occupancy index
//!
//! Built once per decision pass from the roster and dropped afterwards, so
//! it never outlives the snapshot it describes.

use ahash::AHashMap;

use crate::core::types::{Position, SnakeId};
use crate::entity::Snake;
use crate::grid::Grid;

/// One body segment sitting in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub snake: SnakeId,
    /// Index into the body; 0 is the head
    pub segment: usize,
}

/// Map from cell to the segments covering it
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    grid: Grid,
    cells: AHashMap<Position, Vec<Occupant>>,
}

impl OccupancyGrid {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: AHashMap::new(),
        }
    }

    /// Index every segment of every snake, living or not
    pub fn from_snakes<'a>(grid: Grid, snakes: impl IntoIterator<Item = &'a Snake>) -> Self {
        let mut occupancy = Self::new(grid);
        for snake in snakes {
            occupancy.insert_snake(snake);
        }
        occupancy
    }

    fn insert_snake(&mut self, snake: &Snake) {
        for (segment, pos) in snake.body.iter().enumerate() {
            self.cells.entry(*pos).or_default().push(Occupant {
                snake: snake.id,
                segment,
            });
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Any segment at all in this cell
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn occupants(&self, pos: Position) -> &[Occupant] {
        self.cells.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Same answer as `collision::is_colliding`, in constant time
    pub fn is_colliding(&self, pos: Position, self_id: SnakeId) -> bool {
        if !self.grid.contains(pos) {
            return true;
        }
        self.occupants(pos)
            .iter()
            .any(|o| !(o.snake == self_id && o.segment == 0))
    }

    /// Number of distinct occupied cells
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
