//! Analytics configuration types.
//!
//! This module defines the configuration for pricing, yield solving and
//! risk calculations, with loading from TOML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tenor_core::Compounding;
use tenor_math::solvers::{
    SolverConfig, DEFAULT_MAX_BRACKET_DOUBLINGS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use tenor_pricing::{ConvergenceMode, YieldSolver};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// ANALYTICS CONFIGURATION
// =============================================================================

/// Top-level analytics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    pub description: Option<String>,

    /// Default compounding convention.
    pub compounding: Compounding,

    /// Yield solver settings.
    pub solver: SolverSettings,

    /// Risk calculation settings.
    pub risk: RiskSettings,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            name: "DEFAULT".to_string(),
            description: None,
            compounding: Compounding::default(),
            solver: SolverSettings::default(),
            risk: RiskSettings::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a default configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the compounding convention.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        log::debug!("loaded analytics config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|err| ConfigError::Parse {
            format: "toml",
            message: err.to_string(),
        })
    }

    /// Builds a yield solver for the configured compounding and settings.
    pub fn yield_solver(&self) -> YieldSolver {
        self.solver.yield_solver(self.compounding)
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        errors.extend(self.solver.validate());
        errors.extend(self.risk.validate());
        errors
    }
}

// =============================================================================
// SOLVER SETTINGS
// =============================================================================

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Absolute price tolerance.
    pub tolerance: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Cap on bracket doublings.
    pub max_bracket_doublings: u32,
    /// Fail instead of returning an unconverged estimate.
    pub strict: bool,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_bracket_doublings: DEFAULT_MAX_BRACKET_DOUBLINGS,
            strict: false,
        }
    }
}

impl SolverSettings {
    /// Returns the root-finder configuration.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
            .with_max_bracket_doublings(self.max_bracket_doublings)
    }

    /// Returns the convergence mode.
    pub fn mode(&self) -> ConvergenceMode {
        if self.strict {
            ConvergenceMode::Strict
        } else {
            ConvergenceMode::Lenient
        }
    }

    /// Builds a yield solver for `compounding`.
    pub fn yield_solver(&self, compounding: Compounding) -> YieldSolver {
        YieldSolver::new(compounding)
            .with_config(self.solver_config())
            .with_mode(self.mode())
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            errors.push(ValidationError::with_rule(
                "solver.tolerance",
                format!("Tolerance must be positive, got {}", self.tolerance),
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        // 2^1023 is the largest finite power of two
        if self.max_bracket_doublings == 0 || self.max_bracket_doublings > 1000 {
            errors.push(ValidationError::with_rule(
                "solver.max_bracket_doublings",
                "Max bracket doublings must be between 1 and 1000",
                "valid_doublings",
            ));
        }

        errors
    }
}

// =============================================================================
// RISK SETTINGS
// =============================================================================

/// Bump sizes for finite-difference risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Bump for effective duration and convexity, in basis points.
    pub effective_bump_bps: f64,
    /// Bump for repriced DV01, in basis points.
    pub dv01_bump_bps: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            effective_bump_bps: 10.0,
            dv01_bump_bps: 1.0,
        }
    }
}

impl RiskSettings {
    /// Effective-measure bump as a decimal rate.
    pub fn effective_bump(&self) -> f64 {
        self.effective_bump_bps * 1e-4
    }
}

impl Validate for RiskSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("risk.effective_bump_bps", self.effective_bump_bps),
            ("risk.dv01_bump_bps", self.dv01_bump_bps),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1000.0 {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("Bump must be between 0 and 1000 bps, got {value}"),
                    "valid_bump",
                ));
            }
        }

        errors
    }
}
