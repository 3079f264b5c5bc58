//! Subcommand implementations and the argument plumbing they share.

pub mod price;
pub mod simulate;
pub mod validate;

use crate::{McArgs, ParamArgs};
use bsm_core::{OptionParameters, PricerSettings, Result};

/// Reference scenario: S=110, K=115, T=3, r=5%, σ=5%.
const REFERENCE: [f64; 5] = [110.0, 115.0, 3.0, 0.05, 0.05];

impl ParamArgs {
    /// Flags first, then `scenario`, then the reference values.
    pub fn resolve(&self, scenario: Option<&OptionParameters>) -> Result<OptionParameters> {
        let base = scenario.map_or(REFERENCE, |s| {
            [s.spot(), s.strike(), s.maturity(), s.rate(), s.volatility()]
        });
        OptionParameters::new(
            self.spot.unwrap_or(base[0]),
            self.strike.unwrap_or(base[1]),
            self.maturity.unwrap_or(base[2]),
            self.rate.unwrap_or(base[3]),
            self.volatility.unwrap_or(base[4]),
        )
    }
}

impl McArgs {
    /// Switch on the variance-reduction and parallel flags given on the
    /// command line; settings from the config file are otherwise kept.
    pub fn apply(&self, settings: PricerSettings) -> PricerSettings {
        let antithetic = settings.antithetic || self.antithetic;
        let parallel = settings.parallel || self.parallel;
        settings.with_antithetic(antithetic).with_parallel(parallel)
    }
}
