//! Utility modules for arena_walk

pub mod histogram;
pub mod visualization;

pub use histogram::{save_histogram_svg, Histogram, DEFAULT_BINS};
pub use visualization::{Visualizer, PathStyle, colors, prepare_output_dir, quick_plot_trajectory};
