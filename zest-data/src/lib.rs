pub mod catalog;
pub mod seed;

pub use catalog::{CatalogError, CatalogLoader, DishRecord, RestaurantRecord};
pub use seed::StaticCatalog;
