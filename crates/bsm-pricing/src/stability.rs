//! Numeric-stability guard for the closed-form formulas.
//!
//! `d1` divides by `σ·√T`.  Validated parameters keep that strictly
//! positive, but it can still be small enough for `d1` to lose all
//! precision.  [`check_std_dev`] applies the configured
//! [`InstabilityPolicy`] when `σ·√T` falls below `min_std_dev`.

use bsm_core::errors::{Error, Result};
use bsm_core::{InstabilityPolicy, OptionParameters, PricerSettings};

/// Apply the instability policy of `settings` to `params`.
pub fn check_std_dev(params: &OptionParameters, settings: &PricerSettings) -> Result<()> {
    let std_dev = params.std_dev();
    let threshold = settings.min_std_dev;
    if std_dev >= threshold {
        return Ok(());
    }
    match settings.instability {
        InstabilityPolicy::Error => Err(Error::NumericInstability { std_dev, threshold }),
        InstabilityPolicy::Warn => {
            tracing::warn!(
                std_dev,
                threshold,
                volatility = params.volatility(),
                maturity = params.maturity(),
                "volatility * sqrt(maturity) below stability threshold; d1 may be imprecise"
            );
            Ok(())
        }
        InstabilityPolicy::Ignore => Ok(()),
    }
}
