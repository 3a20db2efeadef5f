//! Error types for risk calculations.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_pricing::PricingError;

/// Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Pricing or yield solving failed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Price is zero, so a PV-weighted measure is undefined
    #[error("division by zero in {context}")]
    DivisionByZero { context: String },

    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RiskError {
    pub(crate) fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }
}

impl From<CoreError> for RiskError {
    fn from(err: CoreError) -> Self {
        RiskError::Pricing(PricingError::Core(err))
    }
}

/// True when a PV-weighted measure cannot be formed from `price`.
///
/// Only an exact zero qualifies: continuous discounting at extreme rates
/// produces tiny but valid prices.
pub(crate) fn is_zero_price(price: f64) -> bool {
    price == 0.0
}
