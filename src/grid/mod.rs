//! Grid geometry and occupancy

pub mod bounds;
pub mod occupancy;

pub use bounds::Grid;
pub use occupancy::{Occupant, OccupancyGrid};
