//! # bsm-math
//!
//! Mathematical utilities for bsm-rs: the standard normal distribution
//! (error function via statrs), injectable random number generators, and
//! running statistics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{
    derive_seed, InverseCumulativeNormalRng, MersenneTwisterUniformRng, NormalVariates,
    SeedableNormal, StandardNormalRng, StdNormalRng,
};
pub use statistics::Statistics;
