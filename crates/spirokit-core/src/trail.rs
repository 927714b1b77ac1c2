//! Trail accumulation
//!
//! Records the path of the pen endpoint over time as an ordered polyline,
//! one point per tick. Growth is unbounded by design: whether to cap or
//! ring-buffer a very long trail is a host policy decision, not an engine
//! concern. The host can call [`Trail::clear`] to implement a
//! "clear trail" action.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// The ordered history of pen positions, insertion order = temporal order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<Point>,
}

impl Trail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with room for `capacity` points
    ///
    /// Useful when the host knows the run length up front and wants to
    /// avoid reallocation during the simulation loop.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point at the end of the trail. Always succeeds.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Clear the trail back to empty
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// All recorded points in temporal order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of recorded points (equals the ticks since the last clear)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail has no points yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently recorded point, if any
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total length of the traced polyline
    pub fn total_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut trail = Trail::new();
        assert!(trail.is_empty());

        trail.push(Point::new(1.0, 0.0));
        trail.push(Point::new(2.0, 0.0));
        trail.push(Point::new(3.0, 0.0));

        assert_eq!(trail.len(), 3);
        assert_eq!(trail.points()[0], Point::new(1.0, 0.0));
        assert_eq!(trail.last(), Some(Point::new(3.0, 0.0)));
    }

    #[test]
    fn test_clear() {
        let mut trail = Trail::with_capacity(8);
        trail.push(Point::default());
        trail.push(Point::default());
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.last(), None);
    }

    #[test]
    fn test_total_length() {
        let mut trail = Trail::new();
        assert_eq!(trail.total_length(), 0.0);

        trail.push(Point::new(0.0, 0.0));
        assert_eq!(trail.total_length(), 0.0);

        trail.push(Point::new(3.0, 4.0));
        trail.push(Point::new(3.0, 0.0));
        assert_eq!(trail.total_length(), 9.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut trail = Trail::new();
        trail.push(Point::new(1.25, -3.5));
        trail.push(Point::new(0.0, 7.0));

        let json = serde_json::to_string(&trail).unwrap();
        let back: Trail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trail);
    }

    #[test]
    fn test_duplicate_points_accumulate() {
        // A zero-speed chain appends the same point every tick; the trail
        // must keep every copy.
        let mut trail = Trail::new();
        let p = Point::new(5.0, 5.0);
        for _ in 0..10 {
            trail.push(p);
        }
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.total_length(), 0.0);
    }
}
