//! Pricer settings.
//!
//! [`PricerSettings`] collects the knobs shared by the closed-form pricer,
//! the Monte Carlo estimator and the validation harness.  It is a plain
//! value passed explicitly to whoever needs it; there is no process-wide
//! instance.  With the `serde` feature it can be read from a configuration
//! file, where every field is optional and falls back to its default.

use crate::errors::{Error, Result};
use crate::{Real, Size};

/// What to do when `σ·√T` is too small for `d1` to be computed reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InstabilityPolicy {
    /// Reject the valuation with `Error::NumericInstability`.
    Error,
    /// Emit a warning event and return the (possibly imprecise) value.
    #[default]
    Warn,
    /// Return the value silently.
    Ignore,
}

/// Settings for the pricers and the validation harness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PricerSettings {
    /// Threshold on `σ·√T` below which inputs count as numerically unstable.
    pub min_std_dev: Real,
    /// Policy applied when the threshold is crossed.
    pub instability: InstabilityPolicy,
    /// Pair every normal draw `z` with `−z`.
    pub antithetic: bool,
    /// Evaluate Monte Carlo chunks on the rayon thread pool.
    pub parallel: bool,
    /// Paths per independently-seeded chunk in parallel mode.
    pub chunk_size: Size,
    /// Number of standard errors allowed by the validation harness.
    pub validation_z: Real,
    /// Absolute slack added to the validation tolerance.
    pub validation_floor: Real,
}

impl Default for PricerSettings {
    fn default() -> Self {
        Self {
            min_std_dev: 1e-8,
            instability: InstabilityPolicy::Warn,
            antithetic: false,
            parallel: false,
            chunk_size: 16_384,
            validation_z: 4.0,
            validation_floor: 1e-8,
        }
    }
}

impl PricerSettings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instability threshold.
    pub fn with_min_std_dev(mut self, min_std_dev: Real) -> Self {
        self.min_std_dev = min_std_dev;
        self
    }

    /// Set the instability policy.
    pub fn with_instability(mut self, policy: InstabilityPolicy) -> Self {
        self.instability = policy;
        self
    }

    /// Enable or disable antithetic variates.
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Enable or disable parallel simulation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the chunk size used in parallel mode.
    pub fn with_chunk_size(mut self, chunk_size: Size) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the validation tolerance as `z` standard errors plus `floor`.
    pub fn with_validation_tolerance(mut self, z: Real, floor: Real) -> Self {
        self.validation_z = z;
        self.validation_floor = floor;
        self
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_std_dev.is_finite() && self.min_std_dev >= 0.0) {
            return Err(Error::Config(format!(
                "min_std_dev must be a non-negative finite number, got {}",
                self.min_std_dev
            )));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidSampleCount(0));
        }
        if !(self.validation_z.is_finite() && self.validation_z > 0.0) {
            return Err(Error::Config(format!(
                "validation_z must be positive, got {}",
                self.validation_z
            )));
        }
        if !(self.validation_floor.is_finite() && self.validation_floor >= 0.0) {
            return Err(Error::Config(format!(
                "validation_floor must be non-negative, got {}",
                self.validation_floor
            )));
        }
        Ok(())
    }
}
