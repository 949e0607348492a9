use rust_decimal::Decimal;

use crate::models::{CartItem, Dish, PlacedOrder, Restaurant, Screen};
use crate::tracking::{DriverInfo, Milestone};

/// Completion state of one milestone row on the tracking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneStatus {
    pub milestone: Milestone,
    pub completed: bool,
}

/// Read-only view of the session handed to the presentation layer after
/// every mutation. Everything here is derived from session state at the
/// moment of the call; nothing is cached between snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// True while the fixed-duration splash state is showing.
    pub booting: bool,
    pub current_screen: Screen,
    /// `None` renders the restaurant screen empty rather than crashing.
    pub selected_restaurant: Option<Restaurant>,
    /// `None` renders the dish-details screen empty rather than crashing.
    pub selected_dish: Option<Dish>,
    pub cart_items: Vec<CartItem>,
    /// Total units in the cart (the badge number).
    pub cart_count: u32,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub tracking_step: u8,
    pub milestones: [MilestoneStatus; 4],
    /// Courier details, present once the driver has picked up the order.
    pub driver: Option<DriverInfo>,
    /// Whether the terminal "order received" action is available.
    pub can_confirm_delivery: bool,
    pub order: Option<PlacedOrder>,
    /// A recommendation lookup is in flight.
    pub recommendations_pending: bool,
    pub recommendations: Vec<Dish>,
}
