//! Snake Arena - autonomous multi-snake grid simulation
//!
//! A tick-driven engine where every snake is steered by a heuristic, plus a
//! tokio scheduler that drives it at a fixed rate.

pub mod collision;
pub mod core;
pub mod decision;
pub mod engine;
pub mod entity;
pub mod grid;
pub mod scheduler;
pub mod spawn;

pub use crate::core::config::{ArenaConfig, EngineConfig, GameConfig};
pub use crate::core::error::{ArenaError, Result};
pub use crate::engine::{new_game, Action, Engine, GameState, TickEvent, TickReport};
pub use crate::scheduler::{SchedulerHandle, TickScheduler};
