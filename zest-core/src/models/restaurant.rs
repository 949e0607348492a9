use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Dish;

/// A restaurant with its menu, as supplied by the catalog provider.
/// Read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Star rating on a 0–5 scale.
    pub rating: Decimal,
    /// Display string, e.g. `"25-35 min"`.
    pub delivery_time: String,
    pub delivery_fee: Decimal,
    pub image: String,
    /// Ordered category labels, e.g. `["American", "Burgers"]`.
    pub categories: Vec<String>,
    /// Ordered menu.
    pub menu: Vec<Dish>,
}
