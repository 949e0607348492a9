pub mod cart;
pub mod models;
pub mod pricing;
pub mod provider;
pub mod session;
pub mod tracking;

pub use cart::Cart;
pub use models::*;
pub use provider::{
    CatalogProvider, ProviderConfig, ProviderError, ProviderFactory, ProviderRegistry,
    RecommendationProvider,
};
pub use session::{Effect, Intent, Session, Snapshot};
pub use tracking::{DriverInfo, Milestone, TrackingTimeline};
