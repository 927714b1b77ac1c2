//! Spirograph simulation session
//!
//! Ties a chain and a trail together with the anchor and tick rate so a
//! host can drive the whole per-tick data flow with one call: advance the
//! chain, read the pen endpoint, append it to the trail.

use crate::chain::ArmChain;
use crate::error::ConfigurationError;
use crate::geometry::Point;
use crate::trail::Trail;

/// One independently owned simulation session
///
/// Single-threaded by design: a `step` fully completes before the host
/// reads endpoints or trail points, and nothing here is shared across
/// sessions.
#[derive(Debug, Clone)]
pub struct Spirograph {
    chain: ArmChain,
    trail: Trail,
    anchor: Point,
    tick_rate: f64,
    ticks: u64,
}

impl Spirograph {
    /// Create a session from a constructed chain.
    ///
    /// `tick_rate` is in ticks per second and scales angular speeds into
    /// per-tick increments; it must be positive and finite.
    pub fn new(chain: ArmChain, anchor: Point, tick_rate: f64) -> Result<Self, ConfigurationError> {
        if !tick_rate.is_finite() || tick_rate <= 0.0 {
            return Err(ConfigurationError::NonPositiveTickRate { tick_rate });
        }
        Ok(Self {
            chain,
            trail: Trail::new(),
            anchor,
            tick_rate,
            ticks: 0,
        })
    }

    /// Advance one tick and record the pen position. Returns the recorded
    /// point.
    pub fn step(&mut self) -> Point {
        let pen = self.chain.tick(self.anchor, self.tick_rate);
        self.trail.push(pen);
        self.ticks += 1;
        pen
    }

    /// Advance `ticks` ticks in sequence
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
        tracing::debug!(
            ticks,
            total = self.ticks,
            trail_points = self.trail.len(),
            "simulation advanced"
        );
    }

    /// Reset the session: all angles back to 0, trail cleared, tick count
    /// zeroed. The chain configuration is untouched.
    pub fn reset(&mut self) {
        self.chain.reset_angles();
        self.trail.clear();
        self.ticks = 0;
    }

    /// The chain, for reading endpoints and arm parameters
    pub fn chain(&self) -> &ArmChain {
        &self.chain
    }

    /// The accumulated trail
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Clear only the trail, keeping angular state (a host "clear trail"
    /// action)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// The fixed anchor point arm 0 is attached to
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Re-center the simulation. Takes effect on the next step.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Ticks per second used to scale angular speeds
    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    /// Ticks processed since creation or the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
