//! The cart engine: an ordered list of line items keyed by dish id, with
//! merge-on-add semantics and totals derived on demand.
//!
//! Totals are never cached — `subtotal`/`total` recompute from the line
//! items every time, so there is no running figure to drift out of sync.

use rust_decimal::Decimal;

use crate::models::{CartItem, Dish};

/// The shopping cart. Insertion order of new lines is preserved; merged
/// lines keep their original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines — the number shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Adds `quantity` units of `dish`, merging with an existing line.
    ///
    /// If no line exists for the dish id, a new one is appended with the
    /// given quantity and notes. If a line exists, its quantity grows by
    /// `quantity` and its notes are replaced only when the provided notes
    /// are non-empty — an increment without instructions keeps the
    /// original instructions.
    ///
    /// Callers must pass a positive quantity; zero is treated as a no-op.
    pub fn add_or_merge(
        &mut self,
        dish: Dish,
        quantity: u32,
        notes: Option<String>,
    ) {
        if quantity == 0 {
            tracing::warn!(dish_id = %dish.id, "ignoring add of zero quantity");
            return;
        }
        let notes = notes.filter(|n| !n.trim().is_empty());
        match self.items.iter_mut().find(|item| item.dish.id == dish.id) {
            Some(item) => {
                item.quantity += quantity;
                if notes.is_some() {
                    item.notes = notes;
                }
            }
            None => self.items.push(CartItem::new(dish, quantity, notes)),
        }
    }

    /// Stepper adjustment: applies `delta` to the line's quantity.
    ///
    /// A resulting quantity of at least 1 is stored; zero or less removes
    /// the line entirely, so the cart never holds a non-positive quantity.
    /// Unknown ids are a no-op.
    pub fn adjust_quantity(
        &mut self,
        dish_id: &str,
        delta: i64,
    ) {
        let Some(pos) = self.items.iter().position(|item| item.dish.id == dish_id) else {
            return;
        };
        let next = i64::from(self.items[pos].quantity) + delta;
        if next >= 1 {
            self.items[pos].quantity = next as u32;
        } else {
            self.items.remove(pos);
        }
    }

    /// Removes the line for `dish_id` unconditionally, regardless of its
    /// quantity. No-op when absent.
    pub fn remove(&mut self, dish_id: &str) {
        self.items.retain(|item| item.dish.id != dish_id);
    }

    /// Empties the cart. Invoked on checkout confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Exact sum of unit price × quantity over all lines.
    /// Zero for an empty cart.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal plus a flat delivery fee, applied once.
    pub fn total(&self, delivery_fee: Decimal) -> Decimal {
        self.subtotal() + delivery_fee
    }
}
