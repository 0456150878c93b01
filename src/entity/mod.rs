//! Agents and pickups

pub mod powerup;
pub mod snake;

pub use powerup::{PowerUp, PowerUpKind};
pub use snake::Snake;
