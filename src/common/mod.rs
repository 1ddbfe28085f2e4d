//! Common types, traits, and error definitions for arena_walk
//!
//! This module provides the geometry, error and trait building blocks
//! shared by the generator and the plotting utilities.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
