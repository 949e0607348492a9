//! Scripted walkthrough of a full ordering session.
//!
//! Drives the controller with the same intents a touch UI would produce
//! and renders each snapshot as plain text — a stand-in presentation
//! layer that only consumes snapshots and produces intents.

use anyhow::{Context, Result};
use zest_core::pricing::format_usd;
use zest_core::provider::CatalogProvider;
use zest_core::{Intent, Snapshot};

use crate::controller::SessionController;

/// Compose the special-instructions note the way the dish detail screen
/// does: free text first, then the cutlery request, joined with `|`.
pub fn compose_notes(
    notes: &str,
    include_cutlery: bool,
) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let trimmed = notes.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed);
    }
    if include_cutlery {
        parts.push("Cutlery Requested");
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

pub async fn run(
    controller: &mut SessionController,
    catalog: &dyn CatalogProvider,
    query: Option<String>,
) -> Result<()> {
    println!("ZEST — food delivery walkthrough");
    println!("booting…");
    while controller.snapshot().booting {
        controller.wait_dispatch().await;
    }

    let restaurants = catalog.restaurants().await.context("catalog unavailable")?;
    println!("\nPopular near you:");
    for restaurant in &restaurants {
        println!(
            "  {} — {} · {} · {} delivery",
            restaurant.name,
            restaurant.categories.join(", "),
            restaurant.delivery_time,
            format_usd(restaurant.delivery_fee),
        );
    }

    if let Some(query) = query {
        println!("\nAsking for recommendations: \"{query}\"");
        controller.dispatch(Intent::RequestRecommendations { query });
        while controller.snapshot().recommendations_pending {
            controller.wait_dispatch().await;
        }
        let snapshot = controller.snapshot();
        if snapshot.recommendations.is_empty() {
            println!("  no recommendations available");
        }
        for dish in &snapshot.recommendations {
            println!("  {} — {}", dish.name, format_usd(dish.price));
        }
    }

    let restaurant = restaurants
        .first()
        .context("catalog has no restaurants")?
        .clone();
    println!("\nOpening {}…", restaurant.name);
    controller.dispatch(Intent::SelectRestaurant(restaurant.clone()));

    let dish = restaurant
        .menu
        .first()
        .context("restaurant has no dishes")?
        .clone();
    controller.dispatch(Intent::SelectDish(dish.clone()));
    println!("Adding {} to the cart…", dish.name);
    controller.dispatch(Intent::AddToCart {
        dish: dish.clone(),
        quantity: 1,
        notes: compose_notes("No onions", true),
    });
    // Increment from the cart screen, no new instructions.
    controller.dispatch(Intent::AddToCart {
        dish,
        quantity: 1,
        notes: None,
    });

    render_cart(&controller.snapshot());

    println!("\nChecking out…");
    controller.dispatch(Intent::Checkout);
    run_tracking(controller).await;

    println!("\nOrder received. Back home.");
    Ok(())
}

fn render_cart(snapshot: &Snapshot) {
    println!("\nMy Cart ({} items):", snapshot.cart_count);
    for item in &snapshot.cart_items {
        println!(
            "  {}× {} — {}",
            item.quantity,
            item.dish.name,
            format_usd(item.line_total()),
        );
        if let Some(notes) = &item.notes {
            println!("     note: {notes}");
        }
    }
    println!("  subtotal     {}", format_usd(snapshot.subtotal));
    println!("  delivery fee {}", format_usd(snapshot.delivery_fee));
    println!("  total        {}", format_usd(snapshot.total));
}

async fn run_tracking(controller: &mut SessionController) {
    let mut last_step = u8::MAX;
    loop {
        let snapshot = controller.snapshot();
        if snapshot.tracking_step != last_step {
            last_step = snapshot.tracking_step;
            render_tracking(&snapshot);
        }
        if snapshot.can_confirm_delivery {
            controller.dispatch(Intent::ConfirmDelivery);
            return;
        }
        controller.wait_dispatch().await;
    }
}

fn render_tracking(snapshot: &Snapshot) {
    println!();
    if let Some(order) = &snapshot.order {
        println!(
            "Estimated delivery: {}",
            order.estimated_delivery.format("%-I:%M %p")
        );
    }
    for status in &snapshot.milestones {
        let mark = if status.completed { "●" } else { "○" };
        println!("  {mark} {}", status.milestone.title());
    }
    if let Some(driver) = &snapshot.driver {
        println!(
            "  driver: {} ({}★, {})",
            driver.name, driver.rating, driver.vehicle
        );
    }
}
