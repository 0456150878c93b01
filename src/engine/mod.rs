//! State transition engine
//!
//! `Engine::apply` is the reducer; `Engine::step` composes the per-tick
//! action sequence.

pub mod action;
pub mod collisions;
pub mod consumption;
pub mod effects;
pub mod events;
pub mod init;
pub mod movement;
pub mod reducer;
pub mod respawn;
pub mod state;
pub mod tick;

pub use action::Action;
pub use events::{EliminationCause, TickEvent};
pub use init::new_game;
pub use reducer::Engine;
pub use state::GameState;
pub use tick::{run_ticks, TickReport};
