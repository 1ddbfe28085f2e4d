//! Generated trajectory container

use itertools::Itertools;

use crate::common::{Path2D, Point2D, Pose2D};

/// Immutable result of a single walk.
///
/// Stores x, y and heading as parallel sequences; element `i` is the pose
/// after step `i`. The starting point is kept separately and never appears
/// in the sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    origin: Point2D,
    x: Vec<f64>,
    y: Vec<f64>,
    heading: Vec<f64>,
    rejections: usize,
}

impl Trajectory {
    pub(crate) fn with_capacity(origin: Point2D, capacity: usize) -> Self {
        Self {
            origin,
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            heading: Vec::with_capacity(capacity),
            rejections: 0,
        }
    }

    pub(crate) fn record(&mut self, pose: Pose2D) {
        self.x.push(pose.x);
        self.y.push(pose.y);
        self.heading.push(pose.heading);
    }

    pub(crate) fn set_rejections(&mut self, rejections: usize) {
        self.rejections = rejections;
    }

    /// Build a trajectory from already computed poses
    pub fn from_poses(origin: Point2D, poses: &[Pose2D], rejections: usize) -> Self {
        let mut trajectory = Self::with_capacity(origin, poses.len());
        for pose in poses {
            trajectory.record(*pose);
        }
        trajectory.rejections = rejections;
        trajectory
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Position the walk started from (not recorded in the sequences)
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn heading(&self) -> &[f64] {
        &self.heading
    }

    /// Total number of headings redrawn by the boundary-rejection loop
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn pose(&self, index: usize) -> Option<Pose2D> {
        if index >= self.len() {
            return None;
        }
        Some(Pose2D::new(self.x[index], self.y[index], self.heading[index]))
    }

    pub fn poses(&self) -> impl Iterator<Item = Pose2D> + '_ {
        self.x.iter()
            .zip(self.y.iter())
            .zip(self.heading.iter())
            .map(|((&x, &y), &heading)| Pose2D::new(x, y, heading))
    }

    /// Consume into `(x, y, heading)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.heading)
    }

    pub fn to_path(&self) -> Path2D {
        Path2D::from_xy(&self.x, &self.y)
    }

    /// Distance covered by each step, starting with origin -> first pose
    pub fn step_lengths(&self) -> Vec<f64> {
        std::iter::once(self.origin)
            .chain(self.poses().map(|p| p.position()))
            .tuple_windows()
            .map(|(a, b)| a.distance(&b))
            .collect()
    }

    pub fn total_length(&self) -> f64 {
        self.step_lengths().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Trajectory {
        let poses = [
            Pose2D::new(1.0, 0.0, 0.0),
            Pose2D::new(1.0, 1.0, std::f64::consts::FRAC_PI_2),
            Pose2D::new(0.0, 1.0, std::f64::consts::PI),
        ];
        Trajectory::from_poses(Point2D::origin(), &poses, 4)
    }

    #[test]
    fn test_parallel_sequences() {
        let trajectory = sample();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.x(), &[1.0, 1.0, 0.0]);
        assert_eq!(trajectory.y(), &[0.0, 1.0, 1.0]);
        assert_eq!(trajectory.rejections(), 4);
        assert_eq!(trajectory.pose(1), Some(Pose2D::new(1.0, 1.0, std::f64::consts::FRAC_PI_2)));
        assert_eq!(trajectory.pose(3), None);
    }

    #[test]
    fn test_step_lengths_include_origin() {
        let trajectory = sample();
        let lengths = trajectory.step_lengths();
        assert_eq!(lengths.len(), 3);
        for length in lengths {
            assert_relative_eq!(length, 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(trajectory.total_length(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_into_parts() {
        let (x, y, heading) = sample().into_parts();
        assert_eq!(x.len(), 3);
        assert_eq!(y.len(), 3);
        assert_eq!(heading[2], std::f64::consts::PI);
    }

    #[test]
    fn test_to_path() {
        let path = sample().to_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path.x_coords(), vec![1.0, 1.0, 0.0]);
        assert_eq!(path.y_coords(), vec![0.0, 1.0, 1.0]);
    }
}
