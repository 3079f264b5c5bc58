//! `bsm simulate`

use super::price::print_parameters;
use crate::{Generator, McArgs};
use anyhow::Result;
use bsm_core::{OptionParameters, PricerSettings};
use bsm_math::{InverseCumulativeNormalRng, SeedableNormal, StdNormalRng};
use bsm_pricing::{McEstimate, MonteCarloPricer, TerminalSummary};
use tracing::info;

/// Print the Monte Carlo estimate and a summary of the terminal levels.
pub fn run(params: &OptionParameters, settings: PricerSettings, mc: &McArgs) -> Result<()> {
    info!(paths = mc.paths, seed = mc.seed, generator = ?mc.generator, "simulating");
    let pricer = MonteCarloPricer::new(settings);
    let (estimate, summary) = match mc.generator {
        Generator::MersenneTwister => {
            simulate::<InverseCumulativeNormalRng>(&pricer, params, mc)?
        }
        Generator::Std => simulate::<StdNormalRng>(&pricer, params, mc)?,
    };

    print_parameters(params);
    println!("estimate    : {estimate}");
    let (low, high) = estimate.confidence_interval(1.96);
    println!("95% interval: [{low:.6}, {high:.6}]");
    if let Some(s) = summary {
        println!(
            "S_T         : mean {:.4}, std dev {:.4}, min {:.4}, max {:.4}",
            s.mean, s.std_dev, s.min, s.max
        );
    }
    Ok(())
}

fn simulate<G>(
    pricer: &MonteCarloPricer,
    params: &OptionParameters,
    mc: &McArgs,
) -> Result<(McEstimate, Option<TerminalSummary>)>
where
    G: SeedableNormal + Send,
{
    let estimate = pricer.estimate_seeded::<G>(params, mc.paths, mc.seed)?;
    let levels = pricer.terminal_levels(params, mc.paths, &mut G::from_seed(mc.seed))?;
    Ok((estimate, TerminalSummary::from_levels(&levels)))
}
