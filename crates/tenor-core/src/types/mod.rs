//! Domain types for flat-rate valuation.
//!
//! - [`CashFlow`] / [`CashFlowSchedule`]: timed cash flow amounts
//! - [`Compounding`]: discount-factor convention
//! - [`Frequency`]: coupon payment frequency
//! - [`BondTerms`]: bullet bond description that generates a schedule

mod bond_terms;
mod cashflow;
mod compounding;
mod frequency;

pub use bond_terms::BondTerms;
pub use cashflow::{CashFlow, CashFlowSchedule};
pub use compounding::Compounding;
pub use frequency::Frequency;
