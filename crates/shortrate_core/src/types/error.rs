//! Error types for structured error handling.
//!
//! This module provides:
//! - `SimulationError`: Errors raised before any simulation work begins

use thiserror::Error;

/// Categorised simulation errors.
///
/// A simulation either completes or fails up front; the recurrence itself
/// has no failure mode for finite inputs, so every variant here is raised
/// before the first random draw.
///
/// # Examples
/// ```
/// use shortrate_core::types::SimulationError;
///
/// let err = SimulationError::invalid("num_paths", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameters: num_paths must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A structural invariant of the parameters is violated.
    #[error("Invalid parameters: {name} {reason}")]
    InvalidParameters {
        /// Offending parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl SimulationError {
    /// Create an `InvalidParameters` error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameters { name, .. } => *name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let err = SimulationError::invalid("volatility", "must be non-negative, got -0.1");
        assert!(err.to_string().contains("volatility"));
        assert!(err.to_string().contains("-0.1"));
        assert_eq!(err.parameter(), "volatility");
    }

    #[test]
    fn test_error_equality() {
        let a = SimulationError::invalid("num_steps", "must be positive");
        let b = SimulationError::invalid("num_steps", "must be positive");
        assert_eq!(a, b);
    }
}
