//! Equal-width histogram binning for trajectory diagnostics

use itertools::{Itertools, MinMaxResult};
use plotlib::page::Page;
use plotlib::repr::{Histogram as PlotHistogram, HistogramBins};
use plotlib::style::BoxStyle;
use plotlib::view::ContinuousView;

use crate::common::{WalkError, WalkResult};

/// Bin count used for the diagnostics histograms
pub const DEFAULT_BINS: usize = 20;

/// Counts of values falling into equal-width bins over the data range.
///
/// Bins are half-open except the last one, which also takes the maximum.
/// A constant input is spread over `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    max: f64,
    counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values(values: &[f64], bins: usize) -> WalkResult<Self> {
        if bins == 0 {
            return Err(WalkError::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(WalkError::InvalidParameter(
                "histogram values must be finite".to_string(),
            ));
        }

        let (mut min, mut max) = match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => {
                return Err(WalkError::InvalidParameter(
                    "cannot bin an empty sequence".to_string(),
                ))
            }
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0; bins];
        for &v in values {
            let index = (((v - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(Self { min, max, counts })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn bin_edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        let n = self.counts.len();
        // last edge pinned to the exact maximum so no value falls outside
        (0..=n)
            .map(|i| if i == n { self.max } else { self.min + width * i as f64 })
            .collect()
    }

    pub fn bin_centers(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.counts.len())
            .map(|i| self.min + width * (i as f64 + 0.5))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Render a standalone SVG histogram of `values`.
///
/// Binning follows [`Histogram::from_values`], so constant input gets a
/// unit-wide range instead of zero-width bins.
pub fn save_histogram_svg(values: &[f64], bins: usize, label: &str, path: &str) -> WalkResult<()> {
    let hist = Histogram::from_values(values, bins)?;

    let h = PlotHistogram::from_slice(values, HistogramBins::Bounds(hist.bin_edges()))
        .style(&BoxStyle::new().fill("burlywood"));
    let v = ContinuousView::new()
        .add(h)
        .x_label(label)
        .y_label("Count");

    Page::single(&v)
        .save(path)
        .map_err(|e| WalkError::VisualizationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counts_cover_all_values() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let hist = Histogram::from_values(&values, DEFAULT_BINS).unwrap();
        assert_eq!(hist.bin_count(), 20);
        assert_eq!(hist.total(), 100);
        assert!(hist.counts().iter().all(|&c| c == 5));
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let hist = Histogram::from_values(&[0.0, 1.0, 2.0, 4.0], 4).unwrap();
        assert_eq!(hist.counts(), &[1, 1, 1, 1]);
        assert_eq!(hist.range(), (0.0, 4.0));
    }

    #[test]
    fn test_edges_and_centers() {
        let hist = Histogram::from_values(&[0.0, 10.0], 5).unwrap();
        assert_relative_eq!(hist.bin_width(), 2.0);
        assert_eq!(hist.bin_edges().len(), 6);
        assert_relative_eq!(hist.bin_edges()[5], 10.0);
        assert_relative_eq!(hist.bin_centers()[0], 1.0);
        assert_relative_eq!(hist.bin_centers()[4], 9.0);
    }

    #[test]
    fn test_constant_values() {
        let hist = Histogram::from_values(&[3.0, 3.0, 3.0], 2).unwrap();
        assert_eq!(hist.range(), (2.5, 3.5));
        assert_eq!(hist.counts(), &[0, 3]);
    }

    #[test]
    fn test_svg_histogram_of_constant_values() {
        let path = std::env::temp_dir().join(format!("arena_walk_hist_{}.svg", std::process::id()));
        let path = path.to_str().unwrap();
        save_histogram_svg(&[2.0; 10], DEFAULT_BINS, "hd", path).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_svg_histogram_rejects_empty_input() {
        let result = save_histogram_svg(&[], DEFAULT_BINS, "hd", "unused.svg");
        assert!(matches!(result, Err(WalkError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_input() {
        assert!(Histogram::from_values(&[], 20).is_err());
        assert!(Histogram::from_values(&[1.0], 0).is_err());
        assert!(Histogram::from_values(&[1.0, f64::NAN], 20).is_err());
    }
}
