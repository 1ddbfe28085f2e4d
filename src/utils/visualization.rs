//! Visualization utilities for arena_walk
//!
//! Renders a generated trajectory with gnuplot: the (x, y) path followed by
//! histograms of x, y and heading. Plotting only reads the trajectory.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth};

use crate::common::{Path2D, Visualizable, WalkError, WalkResult};
use crate::trajectory::Trajectory;
use crate::utils::histogram::{Histogram, DEFAULT_BINS};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const ORANGE: &str = "#FFA500";
    pub const PURPLE: &str = "#800080";

    // Semantic colors
    pub const PATH: &str = BLUE;
    pub const X_HISTOGRAM: &str = ORANGE;
    pub const Y_HISTOGRAM: &str = RED;
    pub const HEADING_HISTOGRAM: &str = PURPLE;
    pub const ARENA: &str = BLACK;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 1.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 1.0,
            caption: "Path".to_string(),
        }
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    bins: usize,
    arena_size: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            bins: DEFAULT_BINS,
            arena_size: None,
        }
    }

    /// Set the figure title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set the number of histogram bins
    pub fn set_bins(&mut self, bins: usize) -> &mut Self {
        self.bins = bins;
        self
    }

    /// Fix the path panel to the arena square and draw its outline
    pub fn set_arena(&mut self, size: f64) -> &mut Self {
        self.arena_size = Some(size);
        self
    }

    /// Add a path panel
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.plot_path_xy(&path.x_coords(), &path.y_coords(), style)
    }

    /// Add a path panel from x,y vectors
    pub fn plot_path_xy(&mut self, x: &[f64], y: &[f64], style: &PathStyle) -> &mut Self {
        let arena_size = self.arena_size;
        let axes = self.figure.axes2d();
        axes.lines(x, y, &[
            Caption(&style.caption),
            Color(&style.color),
            LineWidth(style.line_width),
        ]);
        axes.set_x_label("xPos", &[])
            .set_y_label("yPos", &[])
            .set_aspect_ratio(AutoOption::Fix(1.0));

        if let Some(size) = arena_size {
            axes.lines(&[0.0, size, size, 0.0, 0.0], &[0.0, 0.0, size, size, 0.0], &[
                Caption("Arena"),
                Color(colors::ARENA),
            ]);
            axes.set_x_range(AutoOption::Fix(0.0), AutoOption::Fix(size))
                .set_y_range(AutoOption::Fix(0.0), AutoOption::Fix(size));
        }
        self
    }

    /// Add a histogram panel for `values`
    pub fn plot_histogram(&mut self, values: &[f64], label: &str, color: &str) -> WalkResult<&mut Self> {
        let hist = Histogram::from_values(values, self.bins)?;
        let counts: Vec<f64> = hist.counts().iter().map(|&c| c as f64).collect();

        self.figure.axes2d()
            .boxes(&hist.bin_centers(), &counts, &[Caption(label), Color(color)])
            .set_x_label(label, &[])
            .set_y_label("Count", &[]);
        Ok(self)
    }

    /// Lay out the four diagnostics panels: path, x, y and heading histograms
    pub fn plot_trajectory(&mut self, trajectory: &Trajectory) -> WalkResult<&mut Self> {
        if trajectory.is_empty() {
            return Err(WalkError::VisualizationError(
                "cannot plot an empty trajectory".to_string(),
            ));
        }

        self.figure.set_multiplot_layout(1, 4);
        if !self.title.is_empty() {
            self.figure.set_title(&self.title);
        }

        trajectory.visualize(self);
        self.plot_histogram(trajectory.x(), "xPos", colors::X_HISTOGRAM)?;
        self.plot_histogram(trajectory.y(), "yPos", colors::Y_HISTOGRAM)?;
        self.plot_histogram(trajectory.heading(), "hd", colors::HEADING_HISTOGRAM)?;
        Ok(self)
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> WalkResult<()> {
        self.figure
            .show()
            .map_err(|e| WalkError::VisualizationError(e.to_string()))
            .map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> WalkResult<()> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| WalkError::VisualizationError(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str, width: u32, height: u32) -> WalkResult<()> {
        self.figure
            .save_to_svg(path, width, height)
            .map_err(|e| WalkError::VisualizationError(e.to_string()))
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizable for Trajectory {
    fn visualize(&self, vis: &mut Visualizer) {
        vis.plot_path(&self.to_path(), &PathStyle::default());
    }
}

/// Create `dir` and any missing parents for plot output
pub fn prepare_output_dir(dir: &str) -> WalkResult<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Build the standard diagnostics figure for a trajectory
pub fn quick_plot_trajectory(trajectory: &Trajectory, arena_size: f64, title: &str) -> WalkResult<Visualizer> {
    let mut vis = Visualizer::new();
    vis.set_title(title).set_arena(arena_size);
    vis.plot_trajectory(trajectory)?;
    Ok(vis)
}
