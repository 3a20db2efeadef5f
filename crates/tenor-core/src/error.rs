//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building schedules or discounting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Discrete discounting requested with `1 + rate <= 0`.
    #[error("Invalid rate: {rate} - discrete compounding requires 1 + rate > 0")]
    InvalidRate {
        /// The offending rate.
        rate: f64,
    },

    /// Cash flow schedule failed validation.
    #[error("Invalid cash flow schedule: {reason}")]
    InvalidSchedule {
        /// Description of what is wrong.
        reason: String,
    },

    /// Compounding convention name not recognised.
    #[error("Unknown compounding convention: '{name}' (expected discrete or continuous)")]
    UnknownCompounding {
        /// The name that failed to parse.
        name: String,
    },

    /// Bond terms cannot produce a schedule.
    #[error("Invalid bond terms: {reason}")]
    InvalidBondTerms {
        /// Description of what is wrong.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(rate: f64) -> Self {
        Self::InvalidRate { rate }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bond terms error.
    #[must_use]
    pub fn invalid_bond_terms(reason: impl Into<String>) -> Self {
        Self::InvalidBondTerms {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_rate(-1.5);
        assert!(err.to_string().contains("-1.5"));

        let err = CoreError::invalid_schedule("times must be strictly increasing");
        assert!(err.to_string().contains("strictly increasing"));
    }
}
