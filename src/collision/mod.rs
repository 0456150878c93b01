//! Collision oracle
//!
//! Answers "would this cell kill that snake" for both decision lookahead and
//! post-move resolution.

pub mod head_on;
pub mod oracle;

pub use head_on::find_head_on_collisions;
pub use oracle::{collision_at, is_colliding, CollisionKind};
