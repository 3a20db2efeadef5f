//! Flat-rate pricing for fixed income cash flows.
//!
//! This crate prices a [`CashFlowSchedule`](tenor_core::CashFlowSchedule)
//! under a single flat rate and inverts that price back to a yield.
//!
//! # Modules
//!
//! - [`pricer`]: Present value under discrete or continuous compounding
//! - [`yield_solver`]: Yield-to-maturity by bracketing and bisection
//!
//! # Example
//!
//! ```rust
//! use tenor_core::{CashFlowSchedule, Compounding};
//! use tenor_pricing::{present_value, solve_yield};
//!
//! let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
//!
//! let price = present_value(&schedule, 0.09, Compounding::Discrete).unwrap();
//! assert!((price - 102.531).abs() < 1e-3);
//!
//! let ytm = solve_yield(&schedule, price, Compounding::Discrete).unwrap();
//! assert!((ytm - 0.09).abs() < 1e-4);
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod pricer;
pub mod yield_solver;

pub use error::{PricingError, PricingResult};
pub use pricer::{present_value, DiscountedFlow, FlatRatePricer};
pub use yield_solver::{solve_yield, ConvergenceMode, YieldResult, YieldSolver};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::error::{PricingError, PricingResult};
    pub use super::pricer::{present_value, DiscountedFlow, FlatRatePricer};
    pub use super::yield_solver::{solve_yield, ConvergenceMode, YieldResult, YieldSolver};

    pub use tenor_core::{CashFlowSchedule, Compounding};
}
