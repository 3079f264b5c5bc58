//! Analytic European call pricing (Black-Scholes-Merton).
//!
//! Prices a European call on a non-dividend-paying underlying with the
//! closed-form BSM formula and computes its vega.
//!
//! $$C = S N(d_1) - K e^{-rT} N(d_2)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.

use crate::stability::check_std_dev;
use bsm_core::ensure;
use bsm_core::errors::Result;
use bsm_core::{OptionParameters, Price, PricerSettings, Rate, Real, Time, Volatility};
use bsm_math::distributions::{normal_cdf, normal_pdf};

/// Closed-form pricer.
///
/// Holds the [`PricerSettings`] whose numeric-stability policy is applied
/// before `d1` is evaluated.  The free functions of this module use the
/// default settings.
#[derive(Debug, Clone, Default)]
pub struct ClosedFormPricer {
    settings: PricerSettings,
}

impl ClosedFormPricer {
    /// Create a pricer with the given settings.
    pub fn new(settings: PricerSettings) -> Self {
        Self { settings }
    }

    /// The active settings.
    pub fn settings(&self) -> &PricerSettings {
        &self.settings
    }

    /// Standardised moneyness `d1`.
    pub fn d1(&self, params: &OptionParameters) -> Result<Real> {
        check_std_dev(params, &self.settings)?;
        Ok(raw_d1(params))
    }

    /// `d2 = d1 − σ√T`.
    pub fn d2(&self, params: &OptionParameters) -> Result<Real> {
        Ok(self.d1(params)? - params.std_dev())
    }

    /// European call value.
    pub fn call_value(&self, params: &OptionParameters) -> Result<Price> {
        let d1 = self.d1(params)?;
        let d2 = d1 - params.std_dev();
        let value = params.spot() * normal_cdf(d1)
            - params.strike() * params.discount_factor() * normal_cdf(d2);
        ensure!(
            value.is_finite(),
            "call value is not finite for {params:?} (d1 = {d1}, d2 = {d2})"
        );
        // cancellation deep out of the money can leave a few ulps below zero
        let value = value.max(0.0);
        tracing::debug!(
            spot = params.spot(),
            strike = params.strike(),
            maturity = params.maturity(),
            d1,
            d2,
            value,
            "closed-form call value"
        );
        Ok(value)
    }

    /// Vega: `∂C/∂σ = S φ(d1) √T`, per unit of absolute volatility.
    pub fn vega(&self, params: &OptionParameters) -> Result<Real> {
        let d1 = self.d1(params)?;
        Ok(params.spot() * normal_pdf(d1) * params.maturity().sqrt())
    }
}

fn raw_d1(params: &OptionParameters) -> Real {
    let sigma = params.volatility();
    ((params.spot() / params.strike()).ln()
        + (params.rate() + 0.5 * sigma * sigma) * params.maturity())
        / params.std_dev()
}

/// Standardised moneyness `d1`, with default settings.
pub fn d1(params: &OptionParameters) -> Result<Real> {
    ClosedFormPricer::default().d1(params)
}

/// `d2 = d1 − σ√T`, with default settings.
pub fn d2(params: &OptionParameters) -> Result<Real> {
    ClosedFormPricer::default().d2(params)
}

/// European call value, with default settings.
pub fn call_value(params: &OptionParameters) -> Result<Price> {
    ClosedFormPricer::default().call_value(params)
}

/// Call vega, with default settings.
pub fn vega(params: &OptionParameters) -> Result<Real> {
    ClosedFormPricer::default().vega(params)
}

/// Payoff at expiry, `max(S − K, 0)`; the `T → 0⁺` limit of the call value.
#[inline]
pub fn intrinsic_value(spot: Real, strike: Real) -> Price {
    (spot - strike).max(0.0)
}

/// Closed-form call value from raw inputs.
///
/// Fails with `Error::InvalidParameter` if `spot`, `strike`, `maturity` or
/// `volatility` is not strictly positive.
pub fn closed_form_call_value(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Result<Price> {
    call_value(&OptionParameters::new(spot, strike, maturity, rate, volatility)?)
}

/// Closed-form vega from raw inputs.
pub fn closed_form_vega(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Result<Real> {
    vega(&OptionParameters::new(spot, strike, maturity, rate, volatility)?)
}
