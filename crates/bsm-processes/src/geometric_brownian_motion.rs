//! Geometric Brownian motion.
//!
//! ```text
//! dS/S = μ dt + σ dW
//! ```
//!
//! The log-price is Gaussian, so the transition over any horizon can be
//! sampled exactly in one step; no time discretisation is involved.

use crate::stochastic_process::StochasticProcess1D;
use bsm_core::{OptionParameters, Real, Time};

/// Geometric Brownian motion with constant drift and volatility.
///
/// `dS = μ·S·dt + σ·S·dW`
///
/// Closed-form solution: `S(t) = S₀ exp((μ − σ²/2)t + σW(t))`
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricBrownianMotionProcess {
    x0: Real,
    mu: Real,
    sigma: Real,
}

impl GeometricBrownianMotionProcess {
    /// The risk-neutral dynamics of `params`: drift equal to the short rate.
    ///
    /// `OptionParameters` guarantees a positive spot and volatility.
    pub fn risk_neutral(params: &OptionParameters) -> Self {
        Self {
            x0: params.spot(),
            mu: params.rate(),
            sigma: params.volatility(),
        }
    }
}

impl StochasticProcess1D for GeometricBrownianMotionProcess {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift_1d(&self, _t: Time, x: Real) -> Real {
        self.mu * x
    }

    fn diffusion_1d(&self, _t: Time, x: Real) -> Real {
        self.sigma * x
    }

    /// Exact transition: `x · exp((μ − σ²/2)·Δt + σ·√Δt·dw)`.
    #[inline]
    fn evolve_1d(&self, _t: Time, x: Real, dt: Time, dw: Real) -> Real {
        x * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * dw).exp()
    }
}
