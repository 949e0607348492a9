use async_trait::async_trait;

use crate::models::Dish;

use super::ProviderError;

/// Generative service that suggests dishes for a free-text craving query.
///
/// Implementations must synthesize a session-unique id for every returned
/// [`Dish`] (the upstream service is not guaranteed to supply stable ids)
/// and must source an image reference when the service does not provide
/// one.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, query: &str) -> Result<Vec<Dish>, ProviderError>;
}
