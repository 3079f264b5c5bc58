//! Black-Scholes-Merton option parameters.
//!
//! [`OptionParameters`] is an immutable value object: the constructor
//! validates every field, the fields are private, and there are no setters.
//! A value that exists is therefore always a valid pricing scenario.

use crate::errors::{require_finite, require_positive, Result};
use crate::{DiscountFactor, Rate, Real, Time, Volatility};

/// Inputs of a European option valuation under the BSM model.
///
/// Invariants: `spot > 0`, `strike > 0`, `maturity > 0`, `volatility > 0`,
/// and all five fields are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptionParameters"))]
pub struct OptionParameters {
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
}

impl OptionParameters {
    /// Create a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` — current level of the underlying (> 0)
    /// * `strike` — strike price (> 0)
    /// * `maturity` — time to expiry in years (> 0)
    /// * `rate` — continuously-compounded risk-free short rate
    /// * `volatility` — annualised diffusion volatility (> 0)
    pub fn new(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-check the invariants.
    ///
    /// Errors are reported in field order, so a scenario with several bad
    /// inputs names the first one.
    pub fn validate(&self) -> Result<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("maturity", self.maturity)?;
        require_finite("rate", self.rate)?;
        require_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Current level of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Time to expiry in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Continuously-compounded risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Annualised volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Total standard deviation of log-returns to expiry, `σ·√T`.
    pub fn std_dev(&self) -> Real {
        self.volatility * self.maturity.sqrt()
    }

    /// Risk-free discount factor to expiry, `exp(−r·T)`.
    pub fn discount_factor(&self) -> DiscountFactor {
        (-self.rate * self.maturity).exp()
    }

    /// A copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: Real) -> Result<Self> {
        Self::new(spot, self.strike, self.maturity, self.rate, self.volatility)
    }

    /// A copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: Volatility) -> Result<Self> {
        Self::new(self.spot, self.strike, self.maturity, self.rate, volatility)
    }

    /// A copy with a different maturity, re-validated.
    pub fn with_maturity(&self, maturity: Time) -> Result<Self> {
        Self::new(self.spot, self.strike, maturity, self.rate, self.volatility)
    }
}

/// Unvalidated mirror used as the serde intermediate.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawOptionParameters {
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptionParameters> for OptionParameters {
    type Error = crate::errors::Error;

    fn try_from(raw: RawOptionParameters) -> Result<Self> {
        Self::new(raw.spot, raw.strike, raw.maturity, raw.rate, raw.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use approx::assert_relative_eq;

    #[test]
    fn accessors_round_trip() {
        let p = OptionParameters::new(110.0, 115.0, 3.0, 0.05, 0.05).unwrap();
        assert_eq!(p.spot(), 110.0);
        assert_eq!(p.strike(), 115.0);
        assert_eq!(p.maturity(), 3.0);
        assert_eq!(p.rate(), 0.05);
        assert_eq!(p.volatility(), 0.05);
    }

    #[test]
    fn derived_quantities() {
        let p = OptionParameters::new(100.0, 100.0, 4.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(p.std_dev(), 0.4, epsilon = 1e-15);
        assert_relative_eq!(p.discount_factor(), (-0.2_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        for (name, args) in [
            ("spot", (0.0, 100.0, 1.0, 0.05, 0.2)),
            ("strike", (100.0, 0.0, 1.0, 0.05, 0.2)),
            ("maturity", (100.0, 100.0, 0.0, 0.05, 0.2)),
            ("volatility", (100.0, 100.0, 1.0, 0.05, 0.0)),
            ("spot", (-5.0, 100.0, 1.0, 0.05, 0.2)),
        ] {
            let err = OptionParameters::new(args.0, args.1, args.2, args.3, args.4).unwrap_err();
            match err {
                Error::InvalidParameter { name: n, .. } => assert_eq!(n, name),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn negative_rate_is_allowed_but_nan_is_not() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
    }

    #[test]
    fn with_setters_revalidate() {
        let p = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_eq!(p.with_spot(120.0).unwrap().spot(), 120.0);
        assert!(p.with_volatility(0.0).is_err());
        assert!(p.with_maturity(-1.0).is_err());
    }

    proptest::proptest! {
        #[test]
        fn positive_inputs_are_accepted(
            s in 1e-6..1e6f64,
            k in 1e-6..1e6f64,
            t in 1e-9..100.0f64,
            r in -1.0..1.0f64,
            v in 1e-6..5.0f64,
        ) {
            let p = OptionParameters::new(s, k, t, r, v).unwrap();
            proptest::prop_assert!(p.std_dev() > 0.0);
            proptest::prop_assert!(p.discount_factor() > 0.0);
        }

        #[test]
        fn non_positive_volatility_is_rejected(v in -10.0..=0.0f64) {
            proptest::prop_assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, v).is_err());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let ok: OptionParameters = toml::from_str(
            "spot = 110.0\nstrike = 115.0\nmaturity = 3.0\nrate = 0.05\nvolatility = 0.05\n",
        )
        .unwrap();
        assert_eq!(ok.strike(), 115.0);

        let bad: std::result::Result<OptionParameters, _> = toml::from_str(
            "spot = 110.0\nstrike = 115.0\nmaturity = 3.0\nrate = 0.05\nvolatility = 0.0\n",
        );
        assert!(bad.is_err());
    }
}
