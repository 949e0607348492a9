//! Application configuration: a TOML file plus environment overrides.
//!
//! Everything has a default, so a missing `zest.toml` is not an error —
//! the application boots with the offline backend and the standard
//! delivery fee.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use zest_core::pricing;
use zest_core::provider::ProviderConfig;

/// Environment variable that supplies the recommendation API key.
pub const API_KEY_ENV: &str = "ZEST_API_KEY";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Flat per-order delivery fee; falls back to the standard 2.99.
    pub delivery_fee: Option<Decimal>,
    pub ai: AiSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AiSection {
    /// Recommendation backend: `"gemini"` or `"canned"`.
    pub backend: String,
    pub model: String,
    /// Override for the service base URL.
    pub endpoint: Option<String>,
    /// API key; the `ZEST_API_KEY` environment variable takes precedence.
    pub api_key: Option<String>,
}

impl Default for AiSection {
    fn default() -> Self {
        let defaults = ProviderConfig::default();
        Self {
            backend: defaults.backend,
            model: defaults.model,
            endpoint: None,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. The `ZEST_API_KEY` environment variable
    /// overrides any key in the file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config file '{}'", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("cannot parse config file '{}'", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.ai.api_key = Some(key);
            }
        }
        Ok(config)
    }

    pub fn delivery_fee(&self) -> Decimal {
        self.delivery_fee.unwrap_or_else(pricing::default_delivery_fee)
    }

    /// Provider configuration for the registry.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            backend: self.ai.backend.clone(),
            model: self.ai.model.clone(),
            endpoint: self.ai.endpoint.clone(),
            api_key: self.ai.api_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_use_the_canned_backend_and_standard_fee() {
        let config = AppConfig::default();

        assert_eq!(config.ai.backend, "canned");
        assert_eq!(config.delivery_fee(), dec!(2.99));
    }

    #[test]
    fn toml_values_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            delivery_fee = "3.49"

            [ai]
            backend = "gemini"
            model = "gemini-2.5-flash"
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.delivery_fee(), dec!(3.49));
        assert_eq!(config.ai.backend, "gemini");
        assert_eq!(config.provider_config().api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("not_a_field = 1");

        assert!(result.is_err());
    }
}
