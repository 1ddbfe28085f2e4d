//! Common traits defining interfaces for trajectory generation

use crate::common::error::WalkResult;
use crate::trajectory::Trajectory;

/// Trait for synthetic trajectory generators
pub trait TrajectoryGenerator {
    /// Generate a fresh trajectory of `sample_count` poses
    fn generate(&mut self, sample_count: usize) -> WalkResult<Trajectory>;
}

/// Trait for visualizable results
pub trait Visualizable {
    /// Draw to visualizer
    fn visualize(&self, vis: &mut crate::utils::Visualizer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Point2D, Pose2D};

    struct StillGenerator;

    impl TrajectoryGenerator for StillGenerator {
        fn generate(&mut self, sample_count: usize) -> WalkResult<Trajectory> {
            let poses = vec![Pose2D::new(1.0, 1.0, 0.0); sample_count];
            Ok(Trajectory::from_poses(Point2D::new(1.0, 1.0), &poses, 0))
        }
    }

    #[test]
    fn test_trajectory_generator_trait() {
        let mut generator = StillGenerator;
        let trajectory = generator.generate(3).unwrap();
        assert_eq!(trajectory.len(), 3);
    }
}
