//! Random-walk trajectory generator
//!
//! Produces an animal-like path inside a square arena. The heading drifts
//! by a small uniform perturbation every step; whenever the next step would
//! leave the arena, the heading is thrown away and redrawn uniformly until
//! the step lands strictly inside.

use std::f64::consts::PI;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::common::{
    normalize_angle, Arena, Point2D, Pose2D, TrajectoryGenerator, WalkError, WalkResult,
};
use crate::trajectory::Trajectory;

/// Default per-step displacement
pub const DEFAULT_STEP_SIZE: f64 = 0.5;
/// Default arena side length
pub const DEFAULT_BOX_SIZE: f64 = 80.0;
/// Default half-width of the uniform heading perturbation [rad]
pub const DEFAULT_HEADING_NOISE: f64 = 0.2;
/// Default cap on heading redraws for a single step
pub const DEFAULT_MAX_REJECTIONS_PER_STEP: usize = 10_000;

// redraw count above which a single step is reported
const REJECTION_WARN_THRESHOLD: usize = 100;

/// Draw a heading uniformly over (-pi, pi].
pub fn pick_random_angle<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let angle = Uniform::new(-PI, PI).sample(rng);
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

/// Perturb `heading` by U(-noise, noise) and wrap the result into (-pi, pi].
pub fn add_heading_noise<R: Rng + ?Sized>(heading: f64, noise: f64, rng: &mut R) -> f64 {
    if noise <= 0.0 {
        return normalize_angle(heading);
    }
    normalize_angle(heading + Uniform::new(-noise, noise).sample(rng))
}

/// Position reached by moving `step_size` from `position` along `heading`.
pub fn next_step_position(position: &Point2D, heading: f64, step_size: f64) -> Point2D {
    Point2D::new(
        position.x + heading.cos() * step_size,
        position.y + heading.sin() * step_size,
    )
}

/// Configuration for the random walk
#[derive(Debug, Clone)]
pub struct RandomWalkConfig {
    /// Arena side length
    pub box_size: f64,
    /// Distance covered by every step
    pub step_size: f64,
    /// Half-width of the uniform heading perturbation [rad]
    pub heading_noise: f64,
    /// Maximum heading redraws allowed for one step
    pub max_rejections_per_step: usize,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            heading_noise: DEFAULT_HEADING_NOISE,
            max_rejections_per_step: DEFAULT_MAX_REJECTIONS_PER_STEP,
        }
    }
}

impl RandomWalkConfig {
    pub fn new(box_size: f64, step_size: f64) -> Self {
        Self {
            box_size,
            step_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> WalkResult<()> {
        if !self.box_size.is_finite() || self.box_size <= 0.0 {
            return Err(WalkError::InvalidParameter(format!(
                "box_size must be positive and finite, got {}",
                self.box_size
            )));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(WalkError::InvalidParameter(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        // a step of half the box from the centre lands on an edge at best
        if self.step_size >= self.box_size / 2.0 {
            return Err(WalkError::InvalidParameter(format!(
                "step_size ({}) must be smaller than half of box_size ({})",
                self.step_size, self.box_size
            )));
        }
        if !self.heading_noise.is_finite() || self.heading_noise < 0.0 {
            return Err(WalkError::InvalidParameter(format!(
                "heading_noise must be non-negative and finite, got {}",
                self.heading_noise
            )));
        }
        if self.max_rejections_per_step == 0 {
            return Err(WalkError::InvalidParameter(
                "max_rejections_per_step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.box_size)
    }
}

/// Random-walk generator owning its random source
pub struct RandomWalk<R: Rng = StdRng> {
    config: RandomWalkConfig,
    rng: R,
}

impl RandomWalk<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new(config: RandomWalkConfig) -> WalkResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn with_seed(config: RandomWalkConfig, seed: u64) -> WalkResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(config: RandomWalkConfig, rng: R) -> WalkResult<Self> {
        config.validate()?;
        Ok(RandomWalk { config, rng })
    }

    pub fn config(&self) -> &RandomWalkConfig {
        &self.config
    }

    /// Run a walk of `sample_count` steps starting from the arena centre
    pub fn walk(&mut self, sample_count: usize) -> WalkResult<Trajectory> {
        if sample_count == 0 {
            return Err(WalkError::InvalidParameter(
                "sample_count must be positive".to_string(),
            ));
        }

        let arena = self.config.arena();
        let origin = arena.center();
        let mut trajectory = Trajectory::with_capacity(origin, sample_count);

        let mut position = origin;
        let mut heading = pick_random_angle(&mut self.rng);
        let mut total_rejections = 0;

        debug!(
            "random walk start: samples={}, box_size={}, step_size={}, initial heading={:.3}",
            sample_count, self.config.box_size, self.config.step_size, heading
        );

        for step in 0..sample_count {
            heading = add_heading_noise(heading, self.config.heading_noise, &mut self.rng);
            let (pose, attempts) = self.advance(&arena, position, heading, step)?;
            total_rejections += attempts;

            position = pose.position();
            heading = pose.heading;
            trajectory.record(pose);
        }

        trajectory.set_rejections(total_rejections);
        debug!(
            "random walk done: {} poses, {} rejected headings",
            trajectory.len(),
            total_rejections
        );
        Ok(trajectory)
    }

    /// Take one step along `heading`, redrawing the heading until the step
    /// stays inside the arena. Returns the accepted pose and redraw count.
    fn advance(
        &mut self,
        arena: &Arena,
        position: Point2D,
        heading: f64,
        step: usize,
    ) -> WalkResult<(Pose2D, usize)> {
        let mut heading = heading;
        let mut candidate = next_step_position(&position, heading, self.config.step_size);
        let mut attempts = 0;

        while !arena.contains(&candidate) {
            if attempts >= self.config.max_rejections_per_step {
                return Err(WalkError::RejectionBudgetExhausted { step, attempts });
            }
            attempts += 1;
            trace!(
                "step {}: candidate ({:.3}, {:.3}) outside arena, redrawing heading",
                step, candidate.x, candidate.y
            );
            heading = pick_random_angle(&mut self.rng);
            candidate = next_step_position(&position, heading, self.config.step_size);
        }

        if attempts >= REJECTION_WARN_THRESHOLD {
            warn!("step {} needed {} heading redraws", step, attempts);
        }

        Ok((Pose2D::new(candidate.x, candidate.y, heading), attempts))
    }
}

impl<R: Rng> TrajectoryGenerator for RandomWalk<R> {
    fn generate(&mut self, sample_count: usize) -> WalkResult<Trajectory> {
        self.walk(sample_count)
    }
}

/// Generate a walk with a caller-supplied random source.
///
/// Returns `(x, y, heading)`, each of length `sample_count`.
pub fn generate_walk_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    sample_count: usize,
    box_size: f64,
    step_size: f64,
) -> WalkResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let mut walker = RandomWalk::with_rng(RandomWalkConfig::new(box_size, step_size), rng)?;
    Ok(walker.walk(sample_count)?.into_parts())
}

/// Generate a walk from an entropy-seeded random source.
///
/// Use [`DEFAULT_STEP_SIZE`] for the usual half-unit step.
pub fn generate_walk(
    sample_count: usize,
    box_size: f64,
    step_size: f64,
) -> WalkResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let mut rng = StdRng::from_entropy();
    generate_walk_with_rng(&mut rng, sample_count, box_size, step_size)
}
