//! CLI error types.

use rust_decimal::Decimal;
use thiserror::Error;

use tenor_core::CoreError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Must be between 0 and 100.")]
    InvalidCoupon(Decimal),

    /// Invalid rate.
    #[error("Invalid rate: {0}. Must be between -10 and 100.")]
    InvalidRate(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Schedule could not be built.
    #[error(transparent)]
    Schedule(#[from] CoreError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
