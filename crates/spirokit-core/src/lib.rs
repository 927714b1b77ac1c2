//! # Spirokit Core
//!
//! The kinematic update engine for spirograph simulation:
//! - An N-arm chain where each arm rotates at its own angular speed about
//!   the tip of the previous arm
//! - A trail recording the path traced by the terminal arm's endpoint
//! - Angle unit conversion (the configuration boundary speaks degrees per
//!   second, the engine works in radians per second)
//!
//! The engine is deliberately synchronous and single-threaded: one `tick`
//! fully completes before the host reads endpoints or trail points, and no
//! internal locking is provided. Acquiring configuration values, window and
//! event-loop management, and on-screen drawing are host concerns.

pub mod angle;
pub mod chain;
pub mod error;
pub mod geometry;
pub mod simulation;
pub mod trail;

pub use chain::{Arm, ArmChain};
pub use error::{ConfigurationError, Error, Result};
pub use geometry::Point;
pub use simulation::Spirograph;
pub use trail::Trail;
