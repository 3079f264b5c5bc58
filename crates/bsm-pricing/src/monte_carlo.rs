//! Monte Carlo valuation of the European call.
//!
//! Terminal levels are drawn exactly from the log-normal law of geometric
//! Brownian motion, so every path is a single step:
//!
//! ```text
//! S_T = S₀ exp((r − σ²/2)T + σ√T z),   z ~ N(0, 1)
//! ```
//!
//! The estimator is the discounted sample mean of `max(S_T − K, 0)`.  Its
//! standard error shrinks as `O(1/√n)` and is reported in [`McEstimate`].
//!
//! # Overview
//!
//! * [`MonteCarloPricer`] — sequential or parallel estimation with optional
//!   antithetic variates
//! * [`McEstimate`] — value, standard error, and sample count
//! * [`TerminalSummary`] — descriptive statistics of simulated `S_T`
//! * [`call_value`] / [`monte_carlo_call_value`] — plain entry points

use bsm_core::ensure;
use bsm_core::errors::{Error, Result};
use bsm_core::{OptionParameters, Price, PricerSettings, Rate, Real, Size, Time, Volatility};
use bsm_math::random_numbers::{
    derive_seed, InverseCumulativeNormalRng, NormalVariates, SeedableNormal,
};
use bsm_math::statistics::Statistics;
use bsm_processes::{GeometricBrownianMotionProcess, StochasticProcess1D};
use rayon::prelude::*;
use std::fmt;

// ─── Results ──────────────────────────────────────────────────────────────────

/// A Monte Carlo price together with its statistical error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub value: Price,
    /// Standard error of `value`.
    pub std_error: Real,
    /// Number of independent samples behind the mean (antithetic pairs
    /// count once).
    pub paths: Size,
}

impl McEstimate {
    /// `value ± z·std_error`.
    pub fn confidence_interval(&self, z: Real) -> (Real, Real) {
        (self.value - z * self.std_error, self.value + z * self.std_error)
    }

    fn from_statistics(stats: &Statistics) -> Self {
        Self {
            value: stats.mean().unwrap_or(0.0),
            std_error: stats.error_estimate().unwrap_or(0.0),
            paths: stats.samples(),
        }
    }
}

impl fmt::Display for McEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} ± {:.6} ({} paths)",
            self.value, self.std_error, self.paths
        )
    }
}

/// Descriptive statistics of simulated terminal levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalSummary {
    /// Number of levels.
    pub count: Size,
    /// Sample mean.
    pub mean: Real,
    /// Sample standard deviation.
    pub std_dev: Real,
    /// Smallest level.
    pub min: Real,
    /// Largest level.
    pub max: Real,
}

impl TerminalSummary {
    /// Summarise `levels`.  Returns `None` for an empty slice.
    pub fn from_levels(levels: &[Real]) -> Option<Self> {
        let stats: Statistics = levels.iter().copied().collect();
        Some(Self {
            count: stats.samples(),
            mean: stats.mean()?,
            std_dev: stats.std_dev().unwrap_or(0.0),
            min: stats.minimum()?,
            max: stats.maximum()?,
        })
    }
}

// ─── Pricer ───────────────────────────────────────────────────────────────────

/// Monte Carlo pricer for the European call.
///
/// Randomness is always supplied by the caller: either a [`NormalVariates`]
/// source ([`MonteCarloPricer::estimate`]) or a seed for a
/// [`SeedableNormal`] generator ([`MonteCarloPricer::estimate_seeded`]).
#[derive(Debug, Clone, Default)]
pub struct MonteCarloPricer {
    settings: PricerSettings,
}

impl MonteCarloPricer {
    /// Create a pricer with the given settings.
    pub fn new(settings: PricerSettings) -> Self {
        Self { settings }
    }

    /// The active settings.
    pub fn settings(&self) -> &PricerSettings {
        &self.settings
    }

    /// Estimate the call value with draws from `rng`, on the calling thread.
    ///
    /// With antithetic variates enabled, `path_count` pairs `(z, −z)` are
    /// simulated and each pair contributes one averaged sample.
    pub fn estimate<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        rng: &mut G,
    ) -> Result<McEstimate>
    where
        G: NormalVariates + ?Sized,
    {
        require_paths(path_count)?;
        let stats = sample_payoffs(params, path_count, self.settings.antithetic, rng);
        let estimate = McEstimate::from_statistics(&stats);
        trace_estimate(params, &estimate, false);
        require_finite_estimate(params, estimate)
    }

    /// Estimate the call value with a generator of type `G` seeded from
    /// `seed`.
    ///
    /// In parallel mode the paths are split into chunks of
    /// `settings.chunk_size`; chunk `i` draws from `G::from_seed(derive_seed(seed, i))`
    /// and the chunk statistics are merged in index order.  The result
    /// therefore depends only on `seed` and the settings, never on the
    /// number of worker threads.
    pub fn estimate_seeded<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        seed: u64,
    ) -> Result<McEstimate>
    where
        G: SeedableNormal + Send,
    {
        require_paths(path_count)?;
        if !self.settings.parallel {
            let mut rng = G::from_seed(seed);
            return self.estimate(params, path_count, &mut rng);
        }
        self.settings.validate()?;

        let chunk_size = self.settings.chunk_size;
        let chunks = path_count.div_ceil(chunk_size);
        let antithetic = self.settings.antithetic;
        let partials: Vec<Statistics> = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * chunk_size;
                let len = chunk_size.min(path_count - start);
                let mut rng = G::from_seed(derive_seed(seed, chunk as u64));
                sample_payoffs(params, len, antithetic, &mut rng)
            })
            .collect();

        let mut stats = Statistics::new();
        for partial in &partials {
            stats.merge(partial);
        }
        let estimate = McEstimate::from_statistics(&stats);
        trace_estimate(params, &estimate, true);
        require_finite_estimate(params, estimate)
    }

    /// Call value estimate with draws from `rng`.
    pub fn call_value<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        rng: &mut G,
    ) -> Result<Price>
    where
        G: NormalVariates + ?Sized,
    {
        self.estimate(params, path_count, rng).map(|e| e.value)
    }

    /// Simulate `path_count` terminal levels `S_T` under the risk-neutral
    /// measure.
    pub fn terminal_levels<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        rng: &mut G,
    ) -> Result<Vec<Real>>
    where
        G: NormalVariates + ?Sized,
    {
        require_paths(path_count)?;
        let process = GeometricBrownianMotionProcess::risk_neutral(params);
        let maturity = params.maturity();
        Ok((0..path_count)
            .map(|_| process.terminal(maturity, rng.next_normal()))
            .collect())
    }
}

fn require_paths(path_count: Size) -> Result<()> {
    if path_count == 0 {
        return Err(Error::InvalidSampleCount(path_count));
    }
    Ok(())
}

/// Overflowing `S_T` against an underflowing discount factor yields `0·∞`.
fn require_finite_estimate(
    params: &OptionParameters,
    estimate: McEstimate,
) -> Result<McEstimate> {
    ensure!(
        estimate.value.is_finite() && estimate.std_error.is_finite(),
        "monte carlo estimate is not finite for {params:?} ({estimate:?})"
    );
    Ok(estimate)
}

/// Accumulate `samples` discounted payoffs.
fn sample_payoffs<G>(
    params: &OptionParameters,
    samples: Size,
    antithetic: bool,
    rng: &mut G,
) -> Statistics
where
    G: NormalVariates + ?Sized,
{
    let process = GeometricBrownianMotionProcess::risk_neutral(params);
    let maturity = params.maturity();
    let strike = params.strike();
    let discount = params.discount_factor();
    let payoff = |z: Real| discount * (process.terminal(maturity, z) - strike).max(0.0);

    let mut stats = Statistics::new();
    for _ in 0..samples {
        let z = rng.next_normal();
        let value = if antithetic {
            0.5 * (payoff(z) + payoff(-z))
        } else {
            payoff(z)
        };
        stats.add(value);
    }
    stats
}

fn trace_estimate(params: &OptionParameters, estimate: &McEstimate, parallel: bool) {
    tracing::debug!(
        spot = params.spot(),
        strike = params.strike(),
        maturity = params.maturity(),
        paths = estimate.paths,
        value = estimate.value,
        std_error = estimate.std_error,
        parallel,
        "monte carlo call estimate"
    );
}

// ─── Entry points ─────────────────────────────────────────────────────────────

/// Monte Carlo call value with default settings and draws from `rng`.
pub fn call_value<G>(params: &OptionParameters, path_count: Size, rng: &mut G) -> Result<Price>
where
    G: NormalVariates + ?Sized,
{
    MonteCarloPricer::default().call_value(params, path_count, rng)
}

/// Monte Carlo call value from raw inputs, using the Mersenne Twister
/// inverse-cumulative normal generator seeded with `seed`.
///
/// Fails with `Error::InvalidParameter` for non-positive `spot`, `strike`,
/// `maturity` or `volatility`, and with `Error::InvalidSampleCount` when
/// `path_count` is zero.  Identical arguments always give identical output.
pub fn monte_carlo_call_value(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    path_count: Size,
    seed: u64,
) -> Result<Price> {
    let params = OptionParameters::new(spot, strike, maturity, rate, volatility)?;
    let mut rng = InverseCumulativeNormalRng::new(seed);
    call_value(&params, path_count, &mut rng)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_form;
    use bsm_math::StandardNormalRng;

    fn reference() -> OptionParameters {
        OptionParameters::new(110.0, 115.0, 3.0, 0.05, 0.05).unwrap()
    }

    #[test]
    fn mc_call_converges_to_closed_form() {
        let p = reference();
        let mut rng = InverseCumulativeNormalRng::new(42);
        let est = MonteCarloPricer::default()
            .estimate(&p, 100_000, &mut rng)
            .unwrap();
        let bs = closed_form::call_value(&p).unwrap();
        assert!(
            (est.value - bs).abs() < 4.0 * est.std_error,
            "MC call = {est}, closed form {bs:.4}"
        );
        assert_eq!(est.paths, 100_000);
    }

    #[test]
    fn zero_paths_is_rejected() {
        let p = reference();
        let mut rng = InverseCumulativeNormalRng::new(1);
        let pricer = MonteCarloPricer::default();
        assert_eq!(
            pricer.estimate(&p, 0, &mut rng),
            Err(Error::InvalidSampleCount(0))
        );
        assert!(pricer
            .estimate_seeded::<InverseCumulativeNormalRng>(&p, 0, 1)
            .is_err());
        assert!(pricer.terminal_levels(&p, 0, &mut rng).is_err());
        assert!(monte_carlo_call_value(110.0, 115.0, 3.0, 0.05, 0.05, 0, 1).is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = monte_carlo_call_value(110.0, 115.0, 3.0, 0.05, 0.05, 10_000, 7).unwrap();
        let b = monte_carlo_call_value(110.0, 115.0, 3.0, 0.05, 0.05, 10_000, 7).unwrap();
        let c = monte_carlo_call_value(110.0, 115.0, 3.0, 0.05, 0.05, 10_000, 8).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert_ne!(a.to_bits(), c.to_bits());
    }

    #[test]
    fn antithetic_reduces_variance() {
        let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let plain = MonteCarloPricer::default();
        let anti = MonteCarloPricer::new(PricerSettings::new().with_antithetic(true));

        let e_plain = plain
            .estimate(&p, 20_000, &mut InverseCumulativeNormalRng::new(3))
            .unwrap();
        let e_anti = anti
            .estimate(&p, 20_000, &mut InverseCumulativeNormalRng::new(3))
            .unwrap();

        assert!(e_anti.std_error < e_plain.std_error);
        let bs = closed_form::call_value(&p).unwrap();
        assert!((e_anti.value - bs).abs() < 4.0 * e_anti.std_error);
    }

    #[test]
    fn sequential_seeded_matches_injected_source() {
        let p = reference();
        let pricer = MonteCarloPricer::default();
        let seeded = pricer
            .estimate_seeded::<InverseCumulativeNormalRng>(&p, 5_000, 11)
            .unwrap();
        let injected = pricer
            .estimate(&p, 5_000, &mut InverseCumulativeNormalRng::new(11))
            .unwrap();
        assert_eq!(seeded, injected);
    }

    #[test]
    fn any_rand_generator_can_drive_the_pricer() {
        let p = reference();
        let mut rng = StandardNormalRng::seeded(2);
        let value = call_value(&p, 50_000, &mut rng).unwrap();
        let bs = closed_form::call_value(&p).unwrap();
        assert!((value - bs).abs() < 0.2, "value {value}, closed form {bs}");
    }

    #[test]
    fn parallel_uses_every_path() {
        let p = reference();
        let pricer = MonteCarloPricer::new(
            PricerSettings::new().with_parallel(true).with_chunk_size(1_000),
        );
        let est = pricer
            .estimate_seeded::<InverseCumulativeNormalRng>(&p, 10_500, 5)
            .unwrap();
        assert_eq!(est.paths, 10_500);
        let again = pricer
            .estimate_seeded::<InverseCumulativeNormalRng>(&p, 10_500, 5)
            .unwrap();
        assert_eq!(est, again);
    }

    #[test]
    fn terminal_levels_are_positive_with_forward_mean() {
        let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let levels = MonteCarloPricer::default()
            .terminal_levels(&p, 50_000, &mut InverseCumulativeNormalRng::new(9))
            .unwrap();
        assert_eq!(levels.len(), 50_000);
        let summary = TerminalSummary::from_levels(&levels).unwrap();
        assert!(summary.min > 0.0);
        let forward = 100.0 * 0.05_f64.exp();
        // σ(S_T) ≈ 21, so the standard error of the mean is ≈ 0.1
        assert!((summary.mean - forward).abs() < 0.5, "mean {}", summary.mean);
        assert!(summary.max > summary.mean && summary.min < summary.mean);
        assert!(TerminalSummary::from_levels(&[]).is_none());
    }

    #[test]
    fn confidence_interval_is_symmetric() {
        let e = McEstimate {
            value: 10.0,
            std_error: 0.5,
            paths: 100,
        };
        assert_eq!(e.confidence_interval(2.0), (9.0, 11.0));
        assert!(e.to_string().contains("100 paths"));
    }

    #[test]
    fn overflowing_terminal_level_is_reported_not_returned() {
        // S_T overflows to ∞ while e^{-rT} underflows to 0
        let p = OptionParameters::new(100.0, 100.0, 1.0, 1000.0, 0.2).unwrap();
        let pricer = MonteCarloPricer::default();
        let result = pricer.estimate(&p, 1_000, &mut InverseCumulativeNormalRng::new(1));
        assert!(matches!(result, Err(Error::Precondition(_))), "{result:?}");

        let parallel = MonteCarloPricer::new(
            PricerSettings::new().with_parallel(true).with_chunk_size(256),
        );
        let result = parallel.estimate_seeded::<InverseCumulativeNormalRng>(&p, 1_000, 1);
        assert!(matches!(result, Err(Error::Precondition(_))), "{result:?}");
    }

    #[test]
    fn spot_near_max_float_is_reported() {
        let p = OptionParameters::new(1e308, 100.0, 1.0, 0.0, 0.5).unwrap();
        let result = call_value(&p, 1_000, &mut InverseCumulativeNormalRng::new(2));
        assert!(matches!(result, Err(Error::Precondition(_))), "{result:?}");
    }
}
