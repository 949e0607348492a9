use async_trait::async_trait;

use crate::models::Restaurant;

use super::ProviderError;

/// Source of restaurant and menu data. Read-only to the core; supplied
/// once at application start.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Ordered restaurant list shown on the home screen. Each restaurant
    /// carries its ordered menu.
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError>;

    /// Ordered category labels for the browse screen.
    async fn browse_categories(&self) -> Result<Vec<String>, ProviderError>;
}
