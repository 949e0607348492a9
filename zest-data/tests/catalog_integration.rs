//! Integration tests exercising the seed catalog through the provider
//! trait, the way the application consumes it.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use zest_core::provider::CatalogProvider;
use zest_data::StaticCatalog;

#[tokio::test]
async fn provider_returns_seed_restaurants_in_order() {
    let catalog = StaticCatalog::demo().expect("embedded seed data must parse");

    let restaurants = catalog.restaurants().await.expect("provider call failed");

    assert_eq!(restaurants.len(), 3);
    assert_eq!(restaurants[0].id, "r1");
    assert_eq!(restaurants[0].name, "Burger & Co.");
    assert_eq!(restaurants[0].rating, dec!(4.5));
    assert_eq!(restaurants[0].delivery_time, "25-35 min");
    assert_eq!(restaurants[0].delivery_fee, dec!(1.99));
    assert_eq!(
        restaurants[0].categories,
        vec!["American".to_string(), "Burgers".to_string()]
    );
    assert_eq!(restaurants[1].id, "r2");
    assert_eq!(restaurants[2].id, "r3");
}

#[tokio::test]
async fn seed_menus_carry_the_reference_prices() {
    let catalog = StaticCatalog::demo().expect("embedded seed data must parse");

    let restaurants = catalog.restaurants().await.expect("provider call failed");

    let burger_menu = &restaurants[0].menu;
    assert_eq!(burger_menu.len(), 3);
    assert_eq!(burger_menu[0].name, "Classic Cheese");
    assert_eq!(burger_menu[0].price, dec!(12.99));
    assert_eq!(burger_menu[0].calories, Some(850));
    assert_eq!(burger_menu[2].price, dec!(13.50));

    let sushi_menu = &restaurants[1].menu;
    assert_eq!(sushi_menu.len(), 2);
    assert_eq!(sushi_menu[1].name, "Spicy Tuna");
    assert_eq!(sushi_menu[1].price, dec!(9.50));

    let pizza_menu = &restaurants[2].menu;
    assert_eq!(pizza_menu.len(), 2);
    assert_eq!(pizza_menu[1].price, dec!(18.00));
}

#[tokio::test]
async fn provider_returns_all_browse_categories() {
    let catalog = StaticCatalog::demo().expect("embedded seed data must parse");

    let categories = catalog
        .browse_categories()
        .await
        .expect("provider call failed");

    assert_eq!(categories.len(), 16);
    assert_eq!(categories[0], "Burgers");
    assert!(categories.contains(&"Sandwiches".to_string()));
}
