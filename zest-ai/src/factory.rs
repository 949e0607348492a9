use async_trait::async_trait;

use zest_core::provider::{
    ProviderConfig, ProviderError, ProviderFactory, ProviderRegistry, RecommendationProvider,
};

use crate::canned::CannedRecommendations;
use crate::client::GeminiClient;
use crate::provider::GeminiRecommendations;

/// [`ProviderFactory`] for the Gemini backend.
///
/// Register this with a [`ProviderRegistry`] to make the `"gemini"`
/// backend available:
///
/// ```rust
/// use zest_core::provider::ProviderRegistry;
/// use zest_ai::GeminiFactory;
///
/// let mut registry = ProviderRegistry::new();
/// registry.register(Box::new(GeminiFactory));
/// ```
pub struct GeminiFactory;

#[async_trait]
impl ProviderFactory for GeminiFactory {
    fn backend_name(&self) -> &'static str {
        "gemini"
    }

    /// Build a client from the configuration.
    ///
    /// `api_key` is required; `endpoint` overrides the public service URL
    /// (useful for proxies and tests).
    async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn RecommendationProvider>, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::Configuration(
                    "the gemini backend requires an API key (set ZEST_API_KEY)".to_string(),
                )
            })?;
        let base_url = config
            .endpoint
            .clone()
            .unwrap_or_else(|| GeminiClient::DEFAULT_BASE_URL.to_string());
        let client = GeminiClient::new(base_url, config.model.clone(), api_key);
        Ok(Box::new(GeminiRecommendations::new(client)))
    }
}

/// [`ProviderFactory`] for the offline fixture backend.
pub struct CannedFactory;

#[async_trait]
impl ProviderFactory for CannedFactory {
    fn backend_name(&self) -> &'static str {
        "canned"
    }

    async fn create(
        &self,
        _config: &ProviderConfig,
    ) -> Result<Box<dyn RecommendationProvider>, ProviderError> {
        Ok(Box::new(CannedRecommendations::new()))
    }
}

/// Registry with every backend this crate provides.
pub fn build_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(GeminiFactory));
    registry.register(Box::new(CannedFactory));
    registry
}
