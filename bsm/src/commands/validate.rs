//! `bsm validate`

use super::price::print_parameters;
use crate::{Generator, McArgs};
use anyhow::Result;
use bsm_core::{OptionParameters, PricerSettings};
use bsm_math::{InverseCumulativeNormalRng, StdNormalRng};
use bsm_pricing::ValidationHarness;

/// Print the validation report; returns whether the check passed.
pub fn run(params: &OptionParameters, settings: PricerSettings, mc: &McArgs) -> Result<bool> {
    let harness = ValidationHarness::new(settings);
    let report = match mc.generator {
        Generator::MersenneTwister => {
            harness.run_seeded::<InverseCumulativeNormalRng>(params, mc.paths, mc.seed)?
        }
        Generator::Std => harness.run_seeded::<StdNormalRng>(params, mc.paths, mc.seed)?,
    };

    print_parameters(params);
    println!("{report}");
    if let Some(z) = report.z_score() {
        println!("z-score     : {z:.3}");
    }
    println!(
        "a priori tol: {:.6}",
        harness.tolerance_for(params, mc.paths)
    );
    Ok(report.passed())
}
