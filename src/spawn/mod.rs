//! Occupancy-aware spawning for snakes, fruit and power-ups

pub mod fruit;
pub mod placement;
pub mod powerups;
pub mod roster;

pub use fruit::{nearest_fruit, top_up_fruits};
pub use placement::{random_free_position, random_free_position_avoiding};
pub use powerups::maybe_spawn_power_up;
pub use roster::{generate_colors, place_initial_snakes, safe_initial_direction};
