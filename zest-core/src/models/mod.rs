mod cart_item;
mod dish;
mod order;
mod restaurant;
mod screen;

pub use cart_item::CartItem;
pub use dish::Dish;
pub use order::PlacedOrder;
pub use restaurant::Restaurant;
pub use screen::Screen;
