use serde::{Deserialize, Serialize};

/// The closed set of screens the application can show.
///
/// `Home` is the initial screen once the splash state clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Restaurant,
    DishDetails,
    Cart,
    Tracking,
    Browse,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Restaurant => "Restaurant",
            Self::DishDetails => "Dish Details",
            Self::Cart => "Cart",
            Self::Tracking => "Tracking",
            Self::Browse => "Browse",
        }
    }
}
