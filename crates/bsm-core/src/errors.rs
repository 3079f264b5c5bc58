//! Error types for bsm-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! is the single `thiserror`-derived [`Error`] enum below.  Input validation
//! builds the structured variants directly so callers can match on them;
//! other checks use the `ensure!` convenience macro defined here.

use thiserror::Error;

/// The top-level error type used throughout bsm-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model input is outside its domain (non-positive spot, strike,
    /// maturity or volatility, or a non-finite value).
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },

    /// A Monte Carlo run was requested with no samples.
    #[error("invalid sample count {0}: at least one path is required")]
    InvalidSampleCount(usize),

    /// `σ·√T` is below the configured stability threshold and the active
    /// policy treats that as an error.
    #[error("numerically unstable inputs: volatility * sqrt(maturity) = {std_dev:e} is below {threshold:e}")]
    NumericInstability {
        /// The observed total standard deviation `σ·√T`.
        std_dev: f64,
        /// The configured minimum.
        threshold: f64,
    },

    /// Invalid pricer settings (e.g. from a configuration file).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A condition checked with [`ensure!`](crate::ensure) did not hold.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout bsm-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsm_core::ensure;
/// fn positive(x: f64) -> bsm_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Check that `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be strictly positive",
        });
    }
    Ok(value)
}

/// Check that `value` is finite.
pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
