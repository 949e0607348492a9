//! [`RecommendationProvider`] backed by the Gemini client.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use zest_core::models::Dish;
use zest_core::pricing;
use zest_core::provider::{ProviderError, RecommendationProvider};

use crate::client::{ClientError, GeminiClient, Suggestion};

/// Fallback calorie figure when the model omits one.
const DEFAULT_CALORIES: u32 = 500;

impl From<ClientError> for ProviderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ConnectionFailed(msg) => ProviderError::Connection(msg),
            ClientError::Unauthorized => ProviderError::Unauthorized,
            ClientError::RateLimited => ProviderError::RateLimited,
            ClientError::ServerError(status, msg) => {
                ProviderError::Connection(format!("server error ({status}): {msg}"))
            }
            ClientError::Parse(msg) => ProviderError::Parse(msg),
        }
    }
}

/// Recommendation provider that turns model suggestions into [`Dish`]
/// records.
///
/// The upstream service supplies neither stable ids nor images, so each
/// batch of results gets session-unique synthesized ids from a process-wide
/// counter, and images are sourced from the suggestion's keyword.
pub struct GeminiRecommendations {
    client: GeminiClient,
    batches: AtomicU64,
}

impl GeminiRecommendations {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            batches: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl RecommendationProvider for GeminiRecommendations {
    async fn recommend(&self, query: &str) -> Result<Vec<Dish>, ProviderError> {
        let suggestions = self.client.suggest_dishes(query).await?;
        let batch = self.batches.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%query, count = suggestions.len(), "recommendation lookup complete");
        Ok(suggestions
            .into_iter()
            .enumerate()
            .map(|(index, suggestion)| suggestion_to_dish(suggestion, batch, index))
            .collect())
    }
}

/// Convert one suggestion into a [`Dish`] with a synthesized id.
pub(crate) fn suggestion_to_dish(
    suggestion: Suggestion,
    batch: u64,
    index: usize,
) -> Dish {
    Dish {
        id: format!("ai-{batch}-{index}"),
        name: suggestion.name,
        description: suggestion.description,
        price: pricing::round_half_up(
            Decimal::try_from(suggestion.price).unwrap_or_default(),
        ),
        image: image_url(&suggestion.image_keyword, index),
        calories: Some(suggestion.calories.unwrap_or(DEFAULT_CALORIES)),
        rating: Some(Decimal::new(48, 1)),
        category: Some(suggestion.category),
    }
}

/// Deterministic keyword-based image lookup.
fn image_url(
    keyword: &str,
    index: usize,
) -> String {
    let seed: String = keyword
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    format!("https://picsum.photos/seed/{seed}{index}/400/300")
}
