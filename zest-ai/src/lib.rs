pub mod canned;
pub mod client;
pub mod factory;
pub mod provider;

pub use canned::CannedRecommendations;
pub use client::{ClientError, GeminiClient, Suggestion};
pub use factory::{build_registry, CannedFactory, GeminiFactory};
pub use provider::GeminiRecommendations;
