//! Duration calculations for flat-rate schedules.
//!
//! Duration measures the sensitivity of price to changes in the flat rate.
//! This module provides:
//!
//! - **Duration**: PV-weighted average time to payment at a given rate
//! - **Macaulay Duration**: Duration at the yield implied by a price
//! - **Modified Duration**: Macaulay scaled to `-(1/P) dP/dy`
//! - **Effective Duration**: Finite-difference cross-check

mod effective;
mod macaulay;
mod modified;

pub use effective::*;
pub use macaulay::*;
pub use modified::*;

use serde::{Deserialize, Serialize};

/// Duration value (in years)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Duration(f64);

impl Duration {
    /// Create a new Duration value
    pub fn new(years: f64) -> Self {
        Self(years)
    }

    /// Get the duration in years
    pub fn years(&self) -> f64 {
        self.0
    }

    /// Get the duration as f64
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} years", self.0)
    }
}

impl From<f64> for Duration {
    fn from(f: f64) -> Self {
        Self(f)
    }
}
