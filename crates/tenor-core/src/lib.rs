//! # Tenor Core
//!
//! Core types for the Tenor flat-rate fixed income library.
//!
//! This crate provides the foundational building blocks used throughout Tenor:
//!
//! - **Cash flows**: [`CashFlowSchedule`], an ordered, validated sequence of
//!   `(time, amount)` pairs
//! - **Compounding**: [`Compounding`], selecting the discount-factor formula
//! - **Bond terms**: [`BondTerms`], a builder that turns face value, coupon,
//!   maturity and frequency into a schedule
//!
//! ## Design Philosophy
//!
//! - **Validate Early**: Schedules are checked once, at construction
//! - **Pure Functions**: No shared state, every value is passed explicitly
//! - **One Convention Switch**: A single [`Compounding`] enum is threaded
//!   through discounting, pricing and risk instead of parallel function sets
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
//! let df = Compounding::Discrete.discount_factor(0.09, 1.0).unwrap();
//!
//! assert_eq!(schedule.len(), 3);
//! assert!((df - 1.0 / 1.09).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BondTerms, CashFlow, CashFlowSchedule, Compounding, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{BondTerms, CashFlow, CashFlowSchedule, Compounding, Frequency};
