use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use zest_core::models::{Dish, Restaurant};

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("dish '{dish_id}' references unknown restaurant '{restaurant_id}'")]
    UnknownRestaurant {
        dish_id: String,
        restaurant_id: String,
    },

    #[error("duplicate restaurant id '{0}'")]
    DuplicateRestaurant(String),
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParse(err.to_string())
    }
}

/// A single record from the restaurants CSV file.
///
/// Columns:
/// - `id`: restaurant identifier (e.g. `r1`)
/// - `name`: display name
/// - `rating`: star rating, 0–5 decimal
/// - `delivery_time`: display range, e.g. `25-35 min`
/// - `delivery_fee`: flat fee shown on the listing
/// - `image`: image URL
/// - `categories`: pipe-separated labels, e.g. `American|Burgers`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub rating: Decimal,
    pub delivery_time: String,
    pub delivery_fee: Decimal,
    pub image: String,
    pub categories: String,
}

/// A single record from the dishes CSV file.
///
/// Columns:
/// - `restaurant_id`: owning restaurant (must exist in the restaurants file)
/// - `id`: dish identifier, unique within its source
/// - `name`, `description`, `price`, `image`
/// - `calories`: optional (empty for unknown)
/// - `rating`: optional
/// - `category`: optional label
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DishRecord {
    pub restaurant_id: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    #[serde(deserialize_with = "deserialize_optional_u32")]
    pub calories: Option<u32>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub rating: Option<Decimal>,
    pub category: Option<String>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for catalog data from CSV files.
///
/// Restaurants and dishes live in separate files; `assemble` joins them
/// into full [`Restaurant`] values, preserving record order for both the
/// restaurant list and each menu.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse restaurant records from a CSV reader.
    pub fn parse_restaurants<R: Read>(reader: R) -> Result<Vec<RestaurantRecord>, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: RestaurantRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Parse dish records from a CSV reader.
    pub fn parse_dishes<R: Read>(reader: R) -> Result<Vec<DishRecord>, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: DishRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Join parsed records into full [`Restaurant`] values.
    ///
    /// Each dish is appended to its restaurant's menu in record order.
    ///
    /// # Errors
    /// * [`CatalogError::DuplicateRestaurant`] — two restaurant records
    ///   share an id.
    /// * [`CatalogError::UnknownRestaurant`] — a dish references a
    ///   restaurant id that is not in the restaurants file.
    pub fn assemble(
        restaurants: &[RestaurantRecord],
        dishes: &[DishRecord],
    ) -> Result<Vec<Restaurant>, CatalogError> {
        let mut assembled: Vec<Restaurant> = Vec::with_capacity(restaurants.len());
        for record in restaurants {
            if assembled.iter().any(|r| r.id == record.id) {
                return Err(CatalogError::DuplicateRestaurant(record.id.clone()));
            }
            assembled.push(Restaurant {
                id: record.id.clone(),
                name: record.name.clone(),
                rating: record.rating,
                delivery_time: record.delivery_time.clone(),
                delivery_fee: record.delivery_fee,
                image: record.image.clone(),
                categories: record
                    .categories
                    .split('|')
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect(),
                menu: Vec::new(),
            });
        }

        for record in dishes {
            let restaurant = assembled
                .iter_mut()
                .find(|r| r.id == record.restaurant_id)
                .ok_or_else(|| CatalogError::UnknownRestaurant {
                    dish_id: record.id.clone(),
                    restaurant_id: record.restaurant_id.clone(),
                })?;
            restaurant.menu.push(Dish {
                id: record.id.clone(),
                name: record.name.clone(),
                description: record.description.clone(),
                price: record.price,
                image: record.image.clone(),
                calories: record.calories,
                rating: record.rating,
                category: record.category.clone(),
            });
        }

        Ok(assembled)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const RESTAURANTS_CSV: &str = "\
id,name,rating,delivery_time,delivery_fee,image,categories
r1,Burger & Co.,4.5,25-35 min,1.99,https://example.com/r1.jpg,American|Burgers
r2,Sushi Zen,4.8,40-55 min,3.99,https://example.com/r2.jpg,Japanese|Sushi
";

    const DISHES_CSV: &str = "\
restaurant_id,id,name,description,price,image,calories,rating,category
r1,d1,Classic Cheese,Angus beef and cheddar,12.99,https://example.com/d1.jpg,850,,
r1,d2,Bacon Deluxe,Double patty with bacon,15.99,https://example.com/d2.jpg,1100,,
r2,d3,Spicy Tuna,Fresh tuna and spicy mayo,9.50,https://example.com/d3.jpg,,4.2,Sushi
";

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_restaurants_reads_all_records() {
        let records = CatalogLoader::parse_restaurants(RESTAURANTS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "r1");
        assert_eq!(records[0].rating, dec!(4.5));
        assert_eq!(records[0].categories, "American|Burgers");
        assert_eq!(records[1].delivery_fee, dec!(3.99));
    }

    #[test]
    fn parse_dishes_handles_optional_fields() {
        let records = CatalogLoader::parse_dishes(DISHES_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].calories, Some(850));
        assert_eq!(records[0].rating, None);
        assert_eq!(records[0].category, None);
        assert_eq!(records[2].calories, None);
        assert_eq!(records[2].rating, Some(dec!(4.2)));
        assert_eq!(records[2].category.as_deref(), Some("Sushi"));
    }

    #[test]
    fn parse_rejects_malformed_price() {
        let csv = "\
restaurant_id,id,name,description,price,image,calories,rating,category
r1,d1,Broken,bad price,twelve,https://example.com/d1.jpg,,,
";

        let result = CatalogLoader::parse_dishes(csv.as_bytes());

        assert!(matches!(result, Err(CatalogError::CsvParse(_))));
    }

    // =========================================================================
    // assemble tests
    // =========================================================================

    #[test]
    fn assemble_joins_dishes_to_restaurants_in_order() {
        let restaurants = CatalogLoader::parse_restaurants(RESTAURANTS_CSV.as_bytes()).unwrap();
        let dishes = CatalogLoader::parse_dishes(DISHES_CSV.as_bytes()).unwrap();

        let catalog = CatalogLoader::assemble(&restaurants, &dishes).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Burger & Co.");
        assert_eq!(
            catalog[0].categories,
            vec!["American".to_string(), "Burgers".to_string()]
        );
        assert_eq!(catalog[0].menu.len(), 2);
        assert_eq!(catalog[0].menu[0].id, "d1");
        assert_eq!(catalog[0].menu[1].id, "d2");
        assert_eq!(catalog[1].menu.len(), 1);
        assert_eq!(catalog[1].menu[0].price, dec!(9.50));
    }

    #[test]
    fn assemble_rejects_dish_with_unknown_restaurant() {
        let restaurants = CatalogLoader::parse_restaurants(RESTAURANTS_CSV.as_bytes()).unwrap();
        let dishes = vec![DishRecord {
            restaurant_id: "r9".to_string(),
            id: "d9".to_string(),
            name: "Orphan".to_string(),
            description: "no home".to_string(),
            price: dec!(1.00),
            image: String::new(),
            calories: None,
            rating: None,
            category: None,
        }];

        let result = CatalogLoader::assemble(&restaurants, &dishes);

        assert!(matches!(
            result,
            Err(CatalogError::UnknownRestaurant { .. })
        ));
    }

    #[test]
    fn assemble_rejects_duplicate_restaurant_ids() {
        let mut restaurants =
            CatalogLoader::parse_restaurants(RESTAURANTS_CSV.as_bytes()).unwrap();
        restaurants.push(restaurants[0].clone());

        let result = CatalogLoader::assemble(&restaurants, &[]);

        assert!(matches!(result, Err(CatalogError::DuplicateRestaurant(_))));
    }
}
