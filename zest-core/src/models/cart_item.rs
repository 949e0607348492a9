use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Dish;

/// One cart line: a dish plus order-specific fields.
///
/// Uniqueness key is the dish id — the cart holds at most one `CartItem`
/// per dish id, and repeated additions merge by summing quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub dish: Dish,
    /// Always ≥ 1; a quantity that would drop to zero removes the line.
    pub quantity: u32,
    /// Free-text special instructions, e.g. "No onions".
    pub notes: Option<String>,
}

impl CartItem {
    pub fn new(dish: Dish, quantity: u32, notes: Option<String>) -> Self {
        Self {
            dish,
            quantity,
            notes,
        }
    }

    /// Unit price × quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.dish.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn dish(price: Decimal) -> Dish {
        Dish {
            id: "d1".to_string(),
            name: "Classic Cheese".to_string(),
            description: "Angus beef, cheddar, lettuce".to_string(),
            price,
            image: "https://picsum.photos/seed/cheeseburger/400/300".to_string(),
            calories: Some(850),
            rating: None,
            category: None,
        }
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = CartItem::new(dish(dec!(12.99)), 3, None);

        assert_eq!(item.line_total(), dec!(38.97));
    }

    #[test]
    fn line_total_for_single_unit_equals_price() {
        let item = CartItem::new(dish(dec!(9.50)), 1, Some("extra wasabi".to_string()));

        assert_eq!(item.line_total(), dec!(9.50));
    }
}
