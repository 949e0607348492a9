//! Built-in demo catalog: three restaurants with their menus and the
//! browse category list, embedded as CSV at compile time.

use async_trait::async_trait;
use zest_core::models::Restaurant;
use zest_core::provider::{CatalogProvider, ProviderError};

use crate::catalog::{CatalogError, CatalogLoader};

const RESTAURANTS_CSV: &str = include_str!("../data/restaurants.csv");
const DISHES_CSV: &str = include_str!("../data/dishes.csv");

/// Category labels for the browse screen, in display order.
pub const BROWSE_CATEGORIES: [&str; 16] = [
    "Burgers",
    "Pizza",
    "Sushi",
    "Asian",
    "Mexican",
    "Dessert",
    "Healthy",
    "Indian",
    "Thai",
    "Italian",
    "Breakfast",
    "Vegan",
    "Wings",
    "Sandwiches",
    "Coffee",
    "Ice Cream",
];

/// In-memory catalog provider.
///
/// Backed by the embedded seed data by default; `new` accepts any
/// assembled restaurant list for catalogs loaded from external files.
pub struct StaticCatalog {
    restaurants: Vec<Restaurant>,
    categories: Vec<String>,
}

impl StaticCatalog {
    pub fn new(
        restaurants: Vec<Restaurant>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            restaurants,
            categories,
        }
    }

    /// Build the demo catalog from the embedded seed CSVs.
    pub fn demo() -> Result<Self, CatalogError> {
        Ok(Self::new(
            demo_restaurants()?,
            BROWSE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        ))
    }
}

/// Assemble the embedded demo restaurant list.
pub fn demo_restaurants() -> Result<Vec<Restaurant>, CatalogError> {
    let restaurants = CatalogLoader::parse_restaurants(RESTAURANTS_CSV.as_bytes())?;
    let dishes = CatalogLoader::parse_dishes(DISHES_CSV.as_bytes())?;
    CatalogLoader::assemble(&restaurants, &dishes)
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        Ok(self.restaurants.clone())
    }

    async fn browse_categories(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.categories.clone())
    }
}
