pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{ArenaConfig, EngineConfig, GameConfig};
pub use error::{ArenaError, Result};
pub use types::{Direction, Position, SnakeId, Tick};
