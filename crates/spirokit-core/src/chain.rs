//! N-arm kinematic chain
//!
//! An ordered sequence of rigid arms where arm 0 is attached to a fixed
//! anchor and every subsequent arm is attached to the tip of the previous
//! one. Each arm rotates at its own prescribed angular speed; there is no
//! physical coupling between arms, so a single forward pass per tick
//! updates the whole chain in O(N).

use crate::angle;
use crate::error::ConfigurationError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A rigid segment of fixed length rotating about its attachment point
///
/// Length and angular speed are immutable after construction; the current
/// angle advances once per tick and the endpoint is recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    length: f64,
    angular_speed: f64,
    current_angle: f64,
    endpoint: Point,
}

impl Arm {
    fn new(length: f64, angular_speed: f64) -> Self {
        Self {
            length,
            angular_speed,
            current_angle: 0.0,
            endpoint: Point::default(),
        }
    }

    /// Arm length in distance units (pixels for a windowed host)
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Angular speed in radians per second; sign selects the direction
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Current angle in radians, accumulated without wrapping
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Tip position as of the most recent tick
    pub fn endpoint(&self) -> Point {
        self.endpoint
    }
}

/// An ordered chain of arms attached tip-to-root
///
/// Construction validates the configuration once; after that every `tick`
/// is a total state transition. The arm list never resizes.
#[derive(Debug, Clone)]
pub struct ArmChain {
    arms: Vec<Arm>,
    anchor: Point,
}

impl ArmChain {
    /// Build a chain from equal-length lists of arm lengths and angular
    /// speeds in radians per second.
    ///
    /// Fails when the lists are empty, differ in size, or any length is
    /// zero, negative, or non-finite. All angles start at 0.
    pub fn new(lengths: &[f64], angular_speeds: &[f64]) -> Result<Self, ConfigurationError> {
        if lengths.is_empty() && angular_speeds.is_empty() {
            return Err(ConfigurationError::EmptyChain);
        }
        if lengths.len() != angular_speeds.len() {
            return Err(ConfigurationError::ArmCountMismatch {
                lengths: lengths.len(),
                speeds: angular_speeds.len(),
            });
        }
        for (index, &length) in lengths.iter().enumerate() {
            if !length.is_finite() {
                return Err(ConfigurationError::NonFiniteParameter {
                    index,
                    parameter: "length",
                });
            }
            if length <= 0.0 {
                return Err(ConfigurationError::NonPositiveLength { index, length });
            }
        }
        for (index, &speed) in angular_speeds.iter().enumerate() {
            if !speed.is_finite() {
                return Err(ConfigurationError::NonFiniteParameter {
                    index,
                    parameter: "angular speed",
                });
            }
        }

        let arms = lengths
            .iter()
            .zip(angular_speeds)
            .map(|(&length, &speed)| Arm::new(length, speed))
            .collect::<Vec<_>>();
        tracing::debug!(arms = arms.len(), "constructed arm chain");

        Ok(Self {
            arms,
            anchor: Point::default(),
        })
    }

    /// Build a chain from angular speeds given in degrees per second.
    ///
    /// The degrees-to-radians conversion is an engine responsibility: the
    /// configuration boundary speaks degrees, the kinematics do not.
    pub fn from_degrees(
        lengths: &[f64],
        speeds_deg_per_sec: &[f64],
    ) -> Result<Self, ConfigurationError> {
        let speeds: Vec<f64> = speeds_deg_per_sec
            .iter()
            .map(|&deg| angle::degrees_to_radians(deg))
            .collect();
        Self::new(lengths, &speeds)
    }

    /// Advance the chain by one tick and return the pen (terminal) endpoint.
    ///
    /// Endpoints are computed from the pre-increment angles: tick 1 draws
    /// the chain at angle 0, and after tick t every angle equals
    /// `t * speed / tick_rate`. Angles accumulate without wrapping; over
    /// very long runs this costs floating-point precision, which is
    /// accepted (see [`normalize_angles`](Self::normalize_angles)).
    pub fn tick(&mut self, anchor: Point, tick_rate: f64) -> Point {
        debug_assert!(
            tick_rate.is_finite() && tick_rate > 0.0,
            "tick_rate must be positive and finite, got {tick_rate}"
        );
        self.anchor = anchor;

        let mut attach = anchor;
        for arm in &mut self.arms {
            arm.endpoint = attach.polar(arm.length, arm.current_angle);
            attach = arm.endpoint;
        }

        // All endpoints for the tick exist before any angle advances, so
        // every arm sees a consistent phase within the tick.
        for arm in &mut self.arms {
            arm.current_angle += arm.angular_speed / tick_rate;
        }

        attach
    }

    /// Number of arms in the chain (always at least 1)
    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    /// All arms, in chain order
    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    /// The arm at `index`, if it exists
    pub fn arm(&self, index: usize) -> Option<&Arm> {
        self.arms.get(index)
    }

    /// The anchor point supplied to the most recent tick
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Endpoints of every arm as of the most recent tick, in chain order
    pub fn endpoints(&self) -> Vec<Point> {
        self.arms.iter().map(|arm| arm.endpoint).collect()
    }

    /// The pen position: the terminal arm's endpoint
    pub fn pen(&self) -> Point {
        self.arms
            .last()
            .map(|arm| arm.endpoint)
            .unwrap_or(self.anchor)
    }

    /// Attachment point of the arm at `index`: the anchor for arm 0, the
    /// previous arm's endpoint otherwise.
    ///
    /// This is the center a host should use when drawing the rotation
    /// circle of radius [`Arm::length`] for that arm.
    pub fn joint(&self, index: usize) -> Option<Point> {
        if index >= self.arms.len() {
            return None;
        }
        if index == 0 {
            Some(self.anchor)
        } else {
            Some(self.arms[index - 1].endpoint)
        }
    }

    /// Rebase all angles into `[0, 2π)`.
    ///
    /// Optional drift control for sessions running for hours; never called
    /// implicitly because periodicity keeps the trigonometry correct
    /// regardless.
    pub fn normalize_angles(&mut self) {
        for arm in &mut self.arms {
            arm.current_angle = angle::normalize(arm.current_angle);
        }
    }

    /// Reset every angle to 0, as at construction. Endpoints keep their
    /// last computed values until the next tick.
    pub fn reset_angles(&mut self) {
        for arm in &mut self.arms {
            arm.current_angle = 0.0;
        }
    }
}
