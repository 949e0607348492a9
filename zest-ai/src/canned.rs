//! Offline recommendation backend returning fixture dishes.
//!
//! Used by the demo walkthrough and by tests so the application can run
//! end to end without network access or an API key.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use zest_core::models::Dish;
use zest_core::provider::{ProviderError, RecommendationProvider};

use crate::client::Suggestion;
use crate::provider::suggestion_to_dish;

pub struct CannedRecommendations {
    batches: AtomicU64,
}

impl CannedRecommendations {
    pub fn new() -> Self {
        Self {
            batches: AtomicU64::new(0),
        }
    }

    fn fixtures(query: &str) -> Vec<Suggestion> {
        vec![
            Suggestion {
                name: "Firecracker Noodles".to_string(),
                description: format!("Wok-tossed noodles with chili crisp, inspired by \"{query}\""),
                price: 12.5,
                calories: Some(740),
                category: "Asian".to_string(),
                image_keyword: "noodles".to_string(),
            },
            Suggestion {
                name: "Citrus Grilled Chicken".to_string(),
                description: "Charred chicken with lime and fresh herbs".to_string(),
                price: 14.0,
                calories: None,
                category: "Healthy".to_string(),
                image_keyword: "chicken".to_string(),
            },
            Suggestion {
                name: "Molten Chocolate Cake".to_string(),
                description: "Warm chocolate cake with a liquid center".to_string(),
                price: 10.0,
                calories: Some(620),
                category: "Dessert".to_string(),
                image_keyword: "cake".to_string(),
            },
        ]
    }
}

impl Default for CannedRecommendations {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationProvider for CannedRecommendations {
    async fn recommend(&self, query: &str) -> Result<Vec<Dish>, ProviderError> {
        let batch = self.batches.fetch_add(1, Ordering::Relaxed);
        Ok(Self::fixtures(query)
            .into_iter()
            .enumerate()
            .map(|(index, suggestion)| suggestion_to_dish(suggestion, batch, index))
            .collect())
    }
}
