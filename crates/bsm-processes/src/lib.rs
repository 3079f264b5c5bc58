//! # bsm-processes
//!
//! Stochastic process definitions used by the Monte Carlo pricer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod geometric_brownian_motion;
pub mod stochastic_process;

pub use geometric_brownian_motion::GeometricBrownianMotionProcess;
pub use stochastic_process::StochasticProcess1D;
