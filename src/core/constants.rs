//! Fixed game rules
//!
//! Tunable behaviour lives in `core::config`; these are the rules every game
//! follows regardless of configuration.

/// Fruit on the board after every completed transition
pub const FRUIT_POOL_SIZE: usize = 3;

/// Upper bound on power-ups lying on the board
pub const MAX_POWERUPS: usize = 5;

/// Points for eating one fruit (before multipliers)
pub const FRUIT_SCORE: u32 = 10;

/// Points lost on respawn, floored at zero
pub const RESPAWN_PENALTY: u32 = 10;

/// Bodies shorter than this grow on every move instead of translating
pub const MIN_BODY_LENGTH: usize = 3;

/// Random samples before falling back to a linear scan
pub const SPAWN_ATTEMPTS: usize = 100;
