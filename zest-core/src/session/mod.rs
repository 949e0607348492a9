//! The single in-memory application state machine: current screen,
//! selections, cart, tracking timeline, and transient recommendation
//! results, mutated one intent at a time.
//!
//! [`Session::apply`] is a pure transition: it takes an intent, mutates
//! the state, and returns the effects (timers, provider calls) its caller
//! must execute. No two mutations can ever be observed in an inconsistent
//! intermediate form because there is exactly one owner applying them
//! sequentially.

mod effect;
mod intent;
mod snapshot;

use std::time::Duration;

use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::models::{Dish, PlacedOrder, Restaurant, Screen};
use crate::tracking::{DriverInfo, Milestone, TrackingTimeline};

pub use effect::Effect;
pub use intent::Intent;
pub use snapshot::{MilestoneStatus, Snapshot};

/// Duration of the splash state preceding the home screen. No user input
/// can shorten or skip it; a single timer clears it once.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2500);

/// Transient recommendation-request state.
///
/// Each request gets a new id; a completion whose id is no longer current
/// is a late arrival from an abandoned request and is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Recommendations {
    last_request_id: u64,
    pending: bool,
    results: Vec<Dish>,
}

impl Recommendations {
    fn begin(&mut self) -> u64 {
        self.last_request_id += 1;
        self.pending = true;
        self.last_request_id
    }

    fn complete(
        &mut self,
        request_id: u64,
        dishes: Vec<Dish>,
    ) {
        if request_id != self.last_request_id {
            tracing::debug!(
                request_id,
                current = self.last_request_id,
                "discarding late recommendation results"
            );
            return;
        }
        self.pending = false;
        self.results = dishes;
    }
}

/// The application session: one per user, lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    booting: bool,
    current_screen: Screen,
    selected_restaurant: Option<Restaurant>,
    selected_dish: Option<Dish>,
    cart: Cart,
    tracking: TrackingTimeline,
    recommendations: Recommendations,
    order: Option<PlacedOrder>,
    delivery_fee: Decimal,
}

impl Session {
    /// Create a session in the splash state, together with the effects the
    /// caller must run to finish booting (the splash timer).
    pub fn start(delivery_fee: Decimal) -> (Self, Vec<Effect>) {
        let session = Self {
            booting: true,
            current_screen: Screen::Home,
            selected_restaurant: None,
            selected_dish: None,
            cart: Cart::new(),
            tracking: TrackingTimeline::default(),
            recommendations: Recommendations::default(),
            order: None,
            delivery_fee,
        };
        let effects = vec![Effect::ScheduleSplash {
            delay: SPLASH_DURATION,
        }];
        (session, effects)
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn tracking(&self) -> &TrackingTimeline {
        &self.tracking
    }

    /// Apply one intent and return the effects the caller must execute.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::SplashDone => {
                self.booting = false;
                Vec::new()
            }
            Intent::NavigateTo(screen) => self.navigate(screen),
            Intent::Back => self.navigate(self.back_target()),
            Intent::SelectRestaurant(restaurant) => {
                self.selected_restaurant = Some(restaurant);
                self.navigate(Screen::Restaurant)
            }
            Intent::SelectDish(dish) => {
                self.selected_dish = Some(dish);
                self.navigate(Screen::DishDetails)
            }
            Intent::AddToCart {
                dish,
                quantity,
                notes,
            } => {
                self.cart.add_or_merge(dish, quantity, notes);
                // Showing the cart after an add is a UX policy of this
                // application, not a cart-engine requirement.
                self.navigate(Screen::Cart)
            }
            Intent::AdjustQuantity { dish_id, delta } => {
                self.cart.adjust_quantity(&dish_id, delta);
                Vec::new()
            }
            Intent::RemoveFromCart { dish_id } => {
                self.cart.remove(&dish_id);
                Vec::new()
            }
            Intent::Checkout => self.checkout(),
            Intent::ConfirmDelivery => {
                if !self.tracking.can_confirm() {
                    tracing::debug!(
                        step = self.tracking.step(),
                        "ignoring delivery confirmation before arrival"
                    );
                    return Vec::new();
                }
                self.navigate(Screen::Home)
            }
            Intent::RequestRecommendations { query } => {
                let query = query.trim().to_string();
                if query.is_empty() {
                    return Vec::new();
                }
                let request_id = self.recommendations.begin();
                vec![Effect::FetchRecommendations { request_id, query }]
            }
            Intent::RecommendationsLoaded { request_id, dishes } => {
                self.recommendations.complete(request_id, dishes);
                Vec::new()
            }
            Intent::TrackingAdvance { generation, step } => {
                self.tracking.advance(generation, step);
                Vec::new()
            }
        }
    }

    /// Read-only view of the whole session for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        self.warn_on_missing_selection();
        let milestones = Milestone::ALL.map(|milestone| MilestoneStatus {
            milestone,
            completed: self.tracking.is_completed(milestone),
        });
        Snapshot {
            booting: self.booting,
            current_screen: self.current_screen,
            selected_restaurant: self.selected_restaurant.clone(),
            selected_dish: self.selected_dish.clone(),
            cart_items: self.cart.items().to_vec(),
            cart_count: self.cart.item_count(),
            subtotal: self.cart.subtotal(),
            delivery_fee: self.delivery_fee,
            total: self.cart.total(self.delivery_fee),
            tracking_step: self.tracking.step(),
            milestones,
            driver: self.tracking.driver_visible().then(DriverInfo::demo),
            can_confirm_delivery: self.tracking.can_confirm(),
            order: self.order.clone(),
            recommendations_pending: self.recommendations.pending,
            recommendations: self.recommendations.results.clone(),
        }
    }

    fn back_target(&self) -> Screen {
        match self.current_screen {
            // A dish reached directly (e.g. from recommendation results)
            // has no parent restaurant and falls back to home.
            Screen::DishDetails if self.selected_restaurant.is_some() => Screen::Restaurant,
            _ => Screen::Home,
        }
    }

    fn checkout(&mut self) -> Vec<Effect> {
        if self.cart.is_empty() {
            tracing::debug!("ignoring checkout of empty cart");
            return Vec::new();
        }
        self.order = Some(PlacedOrder::place(self.cart.total(self.delivery_fee)));
        self.cart.clear();
        self.navigate(Screen::Tracking)
    }

    fn navigate(&mut self, screen: Screen) -> Vec<Effect> {
        let leaving_tracking =
            self.current_screen == Screen::Tracking && screen != Screen::Tracking;
        let entering_tracking =
            screen == Screen::Tracking && self.current_screen != Screen::Tracking;
        self.current_screen = screen;

        let mut effects = Vec::new();
        if leaving_tracking {
            effects.push(Effect::CancelTracking);
        }
        if entering_tracking {
            let generation = self.tracking.restart();
            effects.push(Effect::ScheduleTracking { generation });
        }
        effects
    }

    fn warn_on_missing_selection(&self) {
        match self.current_screen {
            Screen::Restaurant if self.selected_restaurant.is_none() => {
                tracing::warn!("restaurant screen active with no restaurant selected");
            }
            Screen::DishDetails if self.selected_dish.is_none() => {
                tracing::warn!("dish details screen active with no dish selected");
            }
            _ => {}
        }
    }
}
