mod catalog;
mod factory;
mod recommend;

use thiserror::Error;

pub use catalog::CatalogProvider;
pub use factory::{ProviderConfig, ProviderFactory, ProviderRegistry};
pub use recommend::RecommendationProvider;

/// Errors surfaced by catalog and recommendation providers.
///
/// Recommendation failures are recovered at the controller boundary by
/// substituting an empty result set; they never terminate the session.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("cannot reach provider: {0}")]
    Connection(String),

    #[error("provider rejected credentials")]
    Unauthorized,

    #[error("provider quota exhausted or rate limited")]
    RateLimited,

    #[error("provider response could not be parsed: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}
