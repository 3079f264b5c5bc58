//! `bsm price`

use anyhow::Result;
use bsm_core::{OptionParameters, PricerSettings};
use bsm_pricing::{intrinsic_value, ClosedFormPricer};

/// Print the closed-form valuation of `params`.
pub fn run(params: &OptionParameters, settings: PricerSettings) -> Result<()> {
    let pricer = ClosedFormPricer::new(settings);
    let value = pricer.call_value(params)?;
    let d1 = pricer.d1(params)?;
    let d2 = pricer.d2(params)?;
    let vega = pricer.vega(params)?;

    print_parameters(params);
    println!("call value  : {value:.6}");
    println!("intrinsic   : {:.6}", intrinsic_value(params.spot(), params.strike()));
    println!("d1          : {d1:.9}");
    println!("d2          : {d2:.9}");
    println!("vega        : {vega:.6}");
    Ok(())
}

pub(crate) fn print_parameters(params: &OptionParameters) {
    println!(
        "S={} K={} T={} r={} σ={}",
        params.spot(),
        params.strike(),
        params.maturity(),
        params.rate(),
        params.volatility()
    );
}
