//! arena_walk - synthetic animal trajectories in a square arena
//!
//! This crate generates heading-smoothed random walks confined to an
//! axis-aligned square, for use as stand-in animal paths in behavioral
//! and neuroscience simulations, plus gnuplot/plotlib diagnostics.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod trajectory;

// Re-export common types for convenience
pub use common::{Arena, Point2D, Pose2D, Path2D, normalize_angle};
pub use common::{TrajectoryGenerator, Visualizable};
pub use common::{WalkError, WalkResult};
pub use trajectory::{generate_walk, RandomWalk, RandomWalkConfig, Trajectory};
