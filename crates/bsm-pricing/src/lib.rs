//! # bsm-pricing
//!
//! Black-Scholes-Merton valuation of a European call, two ways.
//!
//! - [`closed_form`] — analytic price, `d1`, `d2`, and vega
//! - [`monte_carlo`] — exact-GBM simulation with an explicit random source
//! - [`validation`] — checks the simulation against the closed form
//! - [`stability`] — policy for inputs where `σ√T` is vanishingly small
//!
//! ```
//! use bsm_pricing::{closed_form_call_value, monte_carlo_call_value};
//!
//! let analytic = closed_form_call_value(110.0, 115.0, 3.0, 0.05, 0.05).unwrap();
//! let simulated = monte_carlo_call_value(110.0, 115.0, 3.0, 0.05, 0.05, 100_000, 42).unwrap();
//! assert!((analytic - 11.506).abs() < 1e-3);
//! assert!((simulated - analytic).abs() < 0.1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod closed_form;
pub mod monte_carlo;
pub mod stability;
pub mod validation;

pub use closed_form::{closed_form_call_value, closed_form_vega, intrinsic_value, ClosedFormPricer};
pub use monte_carlo::{monte_carlo_call_value, McEstimate, MonteCarloPricer, TerminalSummary};
pub use validation::{ValidationHarness, ValidationReport};
