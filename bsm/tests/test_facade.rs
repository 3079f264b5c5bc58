//! The façade exposes the whole pricing workflow.

use approx::assert_relative_eq;
use bsm::core::InstabilityPolicy;
use bsm::math::{InverseCumulativeNormalRng, StdNormalRng};
use bsm::pricing::{closed_form, MonteCarloPricer, ValidationHarness};
use bsm::processes::{GeometricBrownianMotionProcess, StochasticProcess1D};
use bsm::{closed_form_call_value, Error, OptionParameters, PricerSettings};

#[test]
fn test_raw_entry_points() {
    assert_relative_eq!(
        closed_form_call_value(100.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
        10.450584,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        bsm::closed_form_vega(100.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
        37.524035,
        epsilon = 1e-6
    );
    let mc = bsm::monte_carlo_call_value(100.0, 100.0, 1.0, 0.05, 0.2, 100_000, 3).unwrap();
    assert!((mc - 10.450584).abs() < 0.2);
}

#[test]
fn test_both_generators_validate() {
    let p = OptionParameters::new(110.0, 115.0, 3.0, 0.05, 0.05).unwrap();
    let harness = ValidationHarness::default();
    let mt = harness
        .run_seeded::<InverseCumulativeNormalRng>(&p, 40_000, 11)
        .unwrap();
    let std = harness.run_seeded::<StdNormalRng>(&p, 40_000, 11).unwrap();
    assert!(mt.passed(), "{mt}");
    assert!(std.passed(), "{std}");
    assert_eq!(mt.closed_form, std.closed_form);
    assert_ne!(mt.monte_carlo.value, std.monte_carlo.value);
}

#[test]
fn test_terminal_levels_match_process_moments() {
    let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let process = GeometricBrownianMotionProcess::risk_neutral(&p);
    let levels = MonteCarloPricer::default()
        .terminal_levels(&p, 200_000, &mut InverseCumulativeNormalRng::new(21))
        .unwrap();
    let mean = levels.iter().sum::<f64>() / levels.len() as f64;
    // E[S_T] = S·e^{rT}
    assert_relative_eq!(mean, process.x0() * (0.05f64).exp(), max_relative = 5e-3);
}

#[test]
fn test_instability_policy_through_facade() {
    let p = OptionParameters::new(100.0, 90.0, 1e-20, 0.05, 1e-3).unwrap();
    let strict = PricerSettings::new().with_instability(InstabilityPolicy::Error);
    assert!(matches!(
        closed_form::ClosedFormPricer::new(strict).call_value(&p),
        Err(Error::NumericInstability { .. })
    ));
    let lenient = closed_form::call_value(&p).unwrap();
    assert_relative_eq!(lenient, 10.0, epsilon = 1e-9);
}
