//! Optional TOML configuration for the `bsm` binary.
//!
//! ```toml
//! [pricer]
//! antithetic = true
//! parallel = true
//! instability = "error"
//!
//! [scenario]
//! spot = 100.0
//! strike = 100.0
//! maturity = 1.0
//! rate = 0.05
//! volatility = 0.2
//! ```
//!
//! Both tables are optional. Command-line flags override `[scenario]`.

use anyhow::Context;
use bsm_core::{Error, OptionParameters, PricerSettings};
use serde::Deserialize;
use std::path::Path;

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub pricer: PricerSettings,
    pub scenario: Option<OptionParameters>,
}

impl CliConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.pricer.validate()?;
        Ok(config)
    }

    /// Read `path`, or fall back to defaults when no file was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsm_core::InstabilityPolicy;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn reads_both_tables() {
        let config = CliConfig::from_toml(
            r#"
            [pricer]
            antithetic = true
            instability = "error"
            chunk_size = 1024

            [scenario]
            spot = 100.0
            strike = 90.0
            maturity = 0.5
            rate = 0.01
            volatility = 0.3
            "#,
        )
        .unwrap();
        assert!(config.pricer.antithetic);
        assert_eq!(config.pricer.instability, InstabilityPolicy::Error);
        assert_eq!(config.pricer.chunk_size, 1024);
        let scenario = config.scenario.unwrap();
        assert_eq!(scenario.strike(), 90.0);
        assert_eq!(scenario.volatility(), 0.3);
    }

    #[test]
    fn rejects_invalid_scenario() {
        let err = CliConfig::from_toml(
            "[scenario]\nspot = 100.0\nstrike = 100.0\nmaturity = 1.0\nrate = 0.0\nvolatility = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_invalid_settings() {
        assert_eq!(
            CliConfig::from_toml("[pricer]\nchunk_size = 0\n"),
            Err(Error::InvalidSampleCount(0))
        );
        assert!(CliConfig::from_toml("[pricer]\nunknown = 1\n").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/bsm.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bsm.toml"));
    }
}
