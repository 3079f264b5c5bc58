//! Probability distributions.
//!
//! Only the standard normal is needed by the BSM formulas; the error
//! function comes from the `statrs` crate.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
