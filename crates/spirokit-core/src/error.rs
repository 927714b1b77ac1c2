//! Error handling for spirokit-core
//!
//! The only fallible operation in the engine is construction: a chain is
//! either rejected up front with a `ConfigurationError` or it exists in a
//! well-formed state for the rest of the run. `tick` is total and never
//! returns an error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised when a chain or simulation session is constructed from invalid
/// parameters. Fatal to the session: there is no partial or degraded
/// construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The chain must contain at least one arm
    #[error("Chain must contain at least one arm")]
    EmptyChain,

    /// Length and speed lists have different sizes
    #[error("Arm count mismatch: {lengths} lengths vs {speeds} speeds")]
    ArmCountMismatch {
        /// Number of lengths supplied.
        lengths: usize,
        /// Number of angular speeds supplied.
        speeds: usize,
    },

    /// An arm length is zero or negative
    #[error("Arm {index} has non-positive length {length}")]
    NonPositiveLength {
        /// Index of the offending arm.
        index: usize,
        /// The rejected length value.
        length: f64,
    },

    /// An arm parameter is NaN or infinite
    #[error("Arm {index} has non-finite {parameter}")]
    NonFiniteParameter {
        /// Index of the offending arm.
        index: usize,
        /// Which parameter was non-finite ("length" or "angular speed").
        parameter: &'static str,
    },

    /// The tick rate must be a positive number of ticks per second
    #[error("Tick rate must be positive, got {tick_rate}")]
    NonPositiveTickRate {
        /// The rejected tick rate.
        tick_rate: f64,
    },
}

/// Main error type for spirokit
///
/// A unified error type used in public APIs that can fail for more than
/// one reason.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::EmptyChain;
        assert_eq!(err.to_string(), "Chain must contain at least one arm");

        let err = ConfigurationError::ArmCountMismatch {
            lengths: 1,
            speeds: 2,
        };
        assert_eq!(err.to_string(), "Arm count mismatch: 1 lengths vs 2 speeds");

        let err = ConfigurationError::NonPositiveLength {
            index: 1,
            length: -1.0,
        };
        assert_eq!(err.to_string(), "Arm 1 has non-positive length -1");
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigurationError::EmptyChain;
        let err: Error = config_err.into();
        assert!(err.is_configuration_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(!err.is_configuration_error());
    }
}
