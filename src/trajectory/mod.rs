//! Synthetic trajectory generation
//!
//! - random_walk: heading-smoothed random walk confined to a square arena

pub mod random_walk;
pub mod types;

pub use random_walk::{
    add_heading_noise, generate_walk, generate_walk_with_rng, next_step_position,
    pick_random_angle, RandomWalk, RandomWalkConfig, DEFAULT_BOX_SIZE, DEFAULT_STEP_SIZE,
};
pub use types::Trajectory;
