//! Tenor Configuration Layer
//!
//! This crate provides the analytics configuration for the Tenor library:
//! the default compounding convention, yield solver settings and bump sizes
//! for finite-difference risk.
//!
//! # Features
//!
//! - **Serde defaults**: Every field is optional in a config file
//! - **Validation**: [`Validate`] collects every problem, not just the first
//! - **Loading**: TOML or JSON, chosen by file extension
//!
//! # Example
//!
//! ```rust
//! use tenor_config::{AnalyticsConfig, Validate};
//! use tenor_core::Compounding;
//!
//! let config = AnalyticsConfig::from_toml_str(
//!     r#"
//!     compounding = "continuous"
//!
//!     [solver]
//!     tolerance = 1e-8
//!     strict = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.compounding, Compounding::Continuous);
//! assert_eq!(config.solver.max_iterations, 200);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

pub use config::{AnalyticsConfig, RiskSettings, SolverSettings};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
