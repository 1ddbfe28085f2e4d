//! Common types used throughout arena_walk

use nalgebra::Vector2;
use std::f64::consts::PI;

/// Wrap an angle into (-pi, pi] using the two-argument arctangent of its
/// sine and cosine.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.sin().atan2(angle.cos());
    // atan2 may return -pi for a negative-zero sine
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Walker pose: position plus heading in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Square arena spanning the open interval (0, size) on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub size: f64,
}

impl Arena {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.size / 2.0, self.size / 2.0)
    }

    /// Strict interior test; points on an edge are outside.
    pub fn contains(&self, point: &Point2D) -> bool {
        point.x > 0.0 && point.x < self.size && point.y > 0.0 && point.y < self.size
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_angle_range() {
        for &angle in &[4.0, -4.0, 10.0 * PI + 0.3, -PI, PI, 0.0] {
            let a = normalize_angle(angle);
            assert!(a > -PI && a <= PI, "{} -> {}", angle, a);
        }
        assert!((normalize_angle(2.0 * PI + 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_maps_minus_pi_to_pi() {
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn test_arena_contains_is_strict() {
        let arena = Arena::new(10.0);
        assert!(arena.contains(&Point2D::new(5.0, 5.0)));
        assert!(arena.contains(&Point2D::new(1e-9, 9.999)));
        assert!(!arena.contains(&Point2D::new(0.0, 5.0)));
        assert!(!arena.contains(&Point2D::new(5.0, 10.0)));
        assert!(!arena.contains(&Point2D::new(10.0, 0.0)));
        assert!(!arena.contains(&Point2D::new(-1.0, 5.0)));
    }

    #[test]
    fn test_arena_center() {
        assert_eq!(Arena::new(80.0).center(), Point2D::new(40.0, 40.0));
    }

    #[test]
    fn test_path2d_coords() {
        let path = Path2D::from_xy(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.x_coords(), vec![0.0, 1.0, 1.0]);
        assert_eq!(path.y_coords(), vec![0.0, 0.0, 1.0]);
    }
}
