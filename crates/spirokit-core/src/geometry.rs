//! 2D geometry primitives
//!
//! The simulation plane uses screen conventions: x grows to the right,
//! y grows downward, angles are measured in radians from the positive
//! x axis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point (or displacement) in the 2D simulation plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate by the given displacement
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point at `radius` from this one along `angle` radians
    ///
    /// This is the single geometric operation the chain update relies on:
    /// placing an arm tip relative to its attachment point.
    pub fn polar(&self, radius: f64, angle: f64) -> Self {
        debug_assert!(
            radius.is_finite() && angle.is_finite(),
            "polar offset must be finite: radius={radius}, angle={angle}"
        );
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_polar_cardinal_directions() {
        let origin = Point::default();

        let east = origin.polar(2.0, 0.0);
        assert!((east.x - 2.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);

        let south = origin.polar(2.0, FRAC_PI_2);
        assert!(south.x.abs() < 1e-12);
        assert!((south.y - 2.0).abs() < 1e-12);

        let west = origin.polar(2.0, PI);
        assert!((west.x + 2.0).abs() < 1e-12);
        assert!(west.y.abs() < 1e-12);
    }

    #[test]
    fn test_polar_from_offset_origin() {
        let base = Point::new(10.0, -5.0);
        let tip = base.polar(1.0, 0.0);
        assert!((tip.x - 11.0).abs() < 1e-12);
        assert!((tip.y + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.to_string(), "(1.500, -2.000)");
    }
}
