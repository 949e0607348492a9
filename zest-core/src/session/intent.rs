use crate::models::{Dish, Restaurant, Screen};

/// A discrete request to mutate session state, originating from the user,
/// a timer, or a completed provider call.
///
/// The presentation layer is a pure producer of intents and a pure
/// consumer of [`crate::session::Snapshot`]s; nothing else touches the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The splash timer fired; the home screen becomes interactive.
    SplashDone,
    /// Unconditional screen switch. The enumeration is closed, so there is
    /// no invalid-screen guard.
    NavigateTo(Screen),
    /// One-level back: dish details return to their restaurant when one is
    /// selected, otherwise home; every other screen returns home.
    Back,
    /// Open a restaurant's menu.
    SelectRestaurant(Restaurant),
    /// Open a dish's detail view.
    SelectDish(Dish),
    /// Add units of a dish to the cart (merging with an existing line) and
    /// show the cart.
    AddToCart {
        dish: Dish,
        quantity: u32,
        notes: Option<String>,
    },
    /// In-cart stepper: apply a delta to a line's quantity, removing the
    /// line when it would drop below one.
    AdjustQuantity { dish_id: String, delta: i64 },
    /// Delete a cart line unconditionally.
    RemoveFromCart { dish_id: String },
    /// Confirm the order: clears the cart and starts delivery tracking.
    Checkout,
    /// Terminal tracking action, honoured only at the final milestone.
    ConfirmDelivery,
    /// Ask the recommendation provider for dishes matching a craving.
    RequestRecommendations { query: String },
    /// A recommendation lookup finished. `dishes` is empty when the
    /// provider failed — failures never reach the session as errors.
    RecommendationsLoaded { request_id: u64, dishes: Vec<Dish> },
    /// A tracking timer fired for the activation identified by
    /// `generation`.
    TrackingAdvance { generation: u64, step: u8 },
}
