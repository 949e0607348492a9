use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Window between placing an order and the promised arrival, used for the
/// tracking header. Display tuning, not a contract.
const DELIVERY_WINDOW_MINUTES: i64 = 25;

/// Record of a confirmed checkout, created when the cart is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    /// Amount charged at checkout: subtotal plus the delivery fee.
    pub total: Decimal,
}

impl PlacedOrder {
    /// Stamp a new order at the current instant.
    pub fn place(total: Decimal) -> Self {
        Self::place_at(Utc::now(), total)
    }

    /// Stamp a new order at a caller-chosen instant (tests).
    pub fn place_at(
        placed_at: DateTime<Utc>,
        total: Decimal,
    ) -> Self {
        Self {
            placed_at,
            estimated_delivery: placed_at + Duration::minutes(DELIVERY_WINDOW_MINUTES),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn estimated_delivery_is_after_placement() {
        let placed = "2026-08-07T12:30:00Z".parse().unwrap();

        let order = PlacedOrder::place_at(placed, dec!(41.96));

        assert_eq!(order.placed_at, placed);
        assert_eq!(
            order.estimated_delivery - order.placed_at,
            Duration::minutes(DELIVERY_WINDOW_MINUTES)
        );
    }
}
