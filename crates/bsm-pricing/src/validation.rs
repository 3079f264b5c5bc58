//! Cross-check of the Monte Carlo estimator against the closed form.
//!
//! With no market data to test against, agreement between two independent
//! methods is the oracle: for identical parameters the Monte Carlo value
//! must fall within `z` standard errors (plus a small absolute floor) of
//! the analytic value.

use crate::closed_form::ClosedFormPricer;
use crate::monte_carlo::{McEstimate, MonteCarloPricer};
use bsm_core::errors::Result;
use bsm_core::{OptionParameters, Price, PricerSettings, Real, Size};
use bsm_math::random_numbers::{NormalVariates, SeedableNormal};
use std::fmt;

/// Outcome of one validation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationReport {
    /// Analytic call value.
    pub closed_form: Price,
    /// Simulated call value and its error.
    pub monte_carlo: McEstimate,
    /// `|monte_carlo − closed_form|`.
    pub abs_diff: Real,
    /// Largest difference accepted.
    pub tolerance: Real,
}

impl ValidationReport {
    /// Whether the two methods agree.
    pub fn passed(&self) -> bool {
        self.abs_diff < self.tolerance
    }

    /// The difference in units of the Monte Carlo standard error.
    pub fn z_score(&self) -> Option<Real> {
        (self.monte_carlo.std_error > 0.0).then(|| self.abs_diff / self.monte_carlo.std_error)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "closed form : {:.6}", self.closed_form)?;
        writeln!(f, "monte carlo : {}", self.monte_carlo)?;
        writeln!(f, "|difference|: {:.6}", self.abs_diff)?;
        writeln!(f, "tolerance   : {:.6}", self.tolerance)?;
        write!(f, "result      : {}", if self.passed() { "PASS" } else { "FAIL" })
    }
}

/// Runs both pricers on the same parameters and compares them.
#[derive(Debug, Clone, Default)]
pub struct ValidationHarness {
    closed_form: ClosedFormPricer,
    monte_carlo: MonteCarloPricer,
    settings: PricerSettings,
}

impl ValidationHarness {
    /// Create a harness; both pricers share `settings`.
    pub fn new(settings: PricerSettings) -> Self {
        Self {
            closed_form: ClosedFormPricer::new(settings.clone()),
            monte_carlo: MonteCarloPricer::new(settings.clone()),
            settings,
        }
    }

    /// Compare the pricers, drawing Monte Carlo variates from `rng`.
    pub fn run<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        rng: &mut G,
    ) -> Result<ValidationReport>
    where
        G: NormalVariates + ?Sized,
    {
        let closed_form = self.closed_form.call_value(params)?;
        let monte_carlo = self.monte_carlo.estimate(params, path_count, rng)?;
        Ok(self.report(closed_form, monte_carlo))
    }

    /// Compare the pricers with a `G` generator seeded from `seed`
    /// (parallel when the settings ask for it).
    pub fn run_seeded<G>(
        &self,
        params: &OptionParameters,
        path_count: Size,
        seed: u64,
    ) -> Result<ValidationReport>
    where
        G: SeedableNormal + Send,
    {
        let closed_form = self.closed_form.call_value(params)?;
        let monte_carlo = self
            .monte_carlo
            .estimate_seeded::<G>(params, path_count, seed)?;
        Ok(self.report(closed_form, monte_carlo))
    }

    /// Tolerance known before simulating, scaling with `1/√path_count`.
    ///
    /// The standard deviation of the discounted call payoff is bounded by
    /// `e^{−rT}·√E[S_T²] = S·exp(σ²T/2)`, so
    /// `z·S·exp(σ²T/2)/√n + floor` bounds `z` standard errors for any
    /// parameter set.
    pub fn tolerance_for(&self, params: &OptionParameters, path_count: Size) -> Real {
        let sigma = params.volatility();
        let payoff_sd_bound =
            params.spot() * (0.5 * sigma * sigma * params.maturity()).exp();
        self.settings.validation_z * payoff_sd_bound / (path_count.max(1) as Real).sqrt()
            + self.settings.validation_floor
    }

    fn report(&self, closed_form: Price, monte_carlo: McEstimate) -> ValidationReport {
        let abs_diff = (monte_carlo.value - closed_form).abs();
        let tolerance =
            self.settings.validation_z * monte_carlo.std_error + self.settings.validation_floor;
        let report = ValidationReport {
            closed_form,
            monte_carlo,
            abs_diff,
            tolerance,
        };
        if report.passed() {
            tracing::debug!(abs_diff, tolerance, "monte carlo agrees with closed form");
        } else {
            tracing::warn!(
                closed_form,
                monte_carlo = monte_carlo.value,
                abs_diff,
                tolerance,
                "monte carlo disagrees with closed form"
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsm_math::InverseCumulativeNormalRng;

    fn reference() -> OptionParameters {
        OptionParameters::new(110.0, 115.0, 3.0, 0.05, 0.05).unwrap()
    }

    #[test]
    fn reference_scenario_passes() {
        let harness = ValidationHarness::default();
        let report = harness
            .run(&reference(), 100_000, &mut InverseCumulativeNormalRng::new(42))
            .unwrap();
        assert!(report.passed(), "{report}");
        assert!(report.abs_diff < 0.1);
        assert!(report.z_score().unwrap() < 4.0);
    }

    #[test]
    fn tolerance_shrinks_with_path_count() {
        let harness = ValidationHarness::default();
        let p = reference();
        let t1 = harness.tolerance_for(&p, 10_000);
        let t2 = harness.tolerance_for(&p, 1_000_000);
        assert!(t2 < t1);
        // 100x the paths → one tenth of the statistical part
        assert!((t1 / t2 - 10.0).abs() < 1e-3);
    }

    #[test]
    fn a_priori_tolerance_bounds_observed_error() {
        let harness = ValidationHarness::default();
        let p = OptionParameters::new(100.0, 100.0, 2.0, 0.03, 0.4).unwrap();
        let report = harness
            .run_seeded::<InverseCumulativeNormalRng>(&p, 20_000, 17)
            .unwrap();
        let bound = harness.tolerance_for(&p, 20_000);
        assert!(report.tolerance <= bound);
        assert!(report.passed(), "{report}");
    }

    #[test]
    fn failing_report_is_flagged() {
        let report = ValidationReport {
            closed_form: 10.0,
            monte_carlo: McEstimate {
                value: 11.0,
                std_error: 0.1,
                paths: 1_000,
            },
            abs_diff: 1.0,
            tolerance: 0.4,
        };
        assert!(!report.passed());
        assert!(report.to_string().contains("FAIL"));
        assert!((report.z_score().unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn errors_propagate() {
        let harness = ValidationHarness::default();
        assert!(harness
            .run(&reference(), 0, &mut InverseCumulativeNormalRng::new(1))
            .is_err());
    }
}
