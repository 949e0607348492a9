use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu item, as supplied by a catalog or recommendation provider.
///
/// Dishes are immutable once obtained; order-specific data (quantity,
/// special instructions) lives on [`crate::models::CartItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique within its source. Catalog dishes carry stable ids;
    /// recommendation results get session-unique synthesized ids.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in currency units. Non-negative in practice, but the
    /// catalog is trusted and no validation is applied.
    pub price: Decimal,
    /// Image reference (URL in the demo data).
    pub image: String,
    pub calories: Option<u32>,
    pub rating: Option<Decimal>,
    pub category: Option<String>,
}
