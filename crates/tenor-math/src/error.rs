//! Error types for numerical routines.

use thiserror::Error;

/// A specialized Result type for numerical routines.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Bracket expansion hit its doubling cap without crossing zero.
    #[error("No bracket found after {doublings} doublings (upper bound {upper:.3e}, f = {value:.3e})")]
    UnboundedBracket {
        /// Number of doublings performed.
        doublings: u32,
        /// Last upper bound tried.
        upper: f64,
        /// Objective value at the last upper bound.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::UnboundedBracket {
            doublings: 64,
            upper: 1.8e19,
            value: 3.0,
        };
        assert!(err.to_string().contains("64 doublings"));

        let err = MathError::invalid_input("tolerance must be positive");
        assert!(err.to_string().contains("tolerance"));
    }
}
