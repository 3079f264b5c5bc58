//! Base trait for one-dimensional diffusions.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is described by its drift (`μ`),
//! diffusion (`σ`), and an evolve method that advances the state by one
//! time step given a standard-normal shock.

use bsm_core::{Real, Time};

/// A 1-dimensional stochastic process `dX = μ(t,X) dt + σ(t,X) dW`.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Drift `μ(t, x)`.
    fn drift_1d(&self, t: Time, x: Real) -> Real;

    /// Diffusion `σ(t, x)`.
    fn diffusion_1d(&self, t: Time, x: Real) -> Real;

    /// Advance the state by `Δt` given the standard-normal shock `dw`.
    ///
    /// Default: Euler step `x + μ·Δt + σ·√Δt·dw`.  Processes with a
    /// closed-form transition override this with the exact step.
    fn evolve_1d(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real {
        x + self.drift_1d(t, x) * dt + self.diffusion_1d(t, x) * dt.sqrt() * dw
    }

    /// Level at `t` reached from `x0` in a single step with shock `dw`.
    fn terminal(&self, t: Time, dw: Real) -> Real {
        self.evolve_1d(0.0, self.x0(), t, dw)
    }
}
