//! # tenor-risk
//!
//! Interest rate sensitivities for flat-rate cash flow schedules.
//!
//! This crate provides:
//!
//! - **Duration**: PV-weighted time, Macaulay (from price), Modified, Effective
//! - **Convexity**: Analytical and Effective
//! - **DV01**: Price change per basis point
//! - **Calculator**: All metrics for one schedule, plus parallel batches
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::{CashFlowSchedule, Compounding};
//! use tenor_risk::prelude::*;
//!
//! let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
//!
//! let dur = duration(&schedule, 0.09, Compounding::Discrete).unwrap();
//! let cx = convexity(&schedule, 0.09, Compounding::Discrete).unwrap();
//!
//! assert!((dur.as_f64() - 2.739).abs() < 1e-3);
//! assert!((cx.as_f64() - 8.932).abs() < 1e-3);
//! ```

pub mod batch;
pub mod calculator;
pub mod convexity;
pub mod duration;
pub mod dv01;
mod error;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::calculator::*;
    pub use crate::convexity::*;
    pub use crate::duration::*;
    pub use crate::dv01::*;
    pub use crate::{RiskError, RiskResult};
}
