//! # bsm
//!
//! Black-Scholes-Merton valuation of a European call, analytically and by
//! Monte Carlo simulation, with a harness that checks one against the other.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bsm-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bsm = "0.1"
//! ```
//!
//! ```rust
//! use bsm::core::OptionParameters;
//! use bsm::math::InverseCumulativeNormalRng;
//! use bsm::pricing::{closed_form, ValidationHarness};
//!
//! let params = OptionParameters::new(110.0, 115.0, 3.0, 0.05, 0.05).unwrap();
//! let value = closed_form::call_value(&params).unwrap();
//! assert!((value - 11.506).abs() < 1e-3);
//!
//! let report = ValidationHarness::default()
//!     .run(&params, 50_000, &mut InverseCumulativeNormalRng::new(7))
//!     .unwrap();
//! assert!(report.passed());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, option parameters, settings, and error definitions.
pub use bsm_core as core;

/// Normal distribution, random number generators, and statistics.
pub use bsm_math as math;

/// Geometric Brownian motion.
pub use bsm_processes as processes;

/// Closed-form and Monte Carlo pricers and the validation harness.
pub use bsm_pricing as pricing;

pub use bsm_core::{Error, OptionParameters, PricerSettings, Result};
pub use bsm_pricing::{
    closed_form_call_value, closed_form_vega, monte_carlo_call_value, ValidationReport,
};
