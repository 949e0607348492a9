use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use zest_data::seed;
use zest_data::CatalogLoader;

/// Validate catalog CSV files and print a summary.
///
/// The restaurants file should have the columns:
/// id, name, rating, delivery_time, delivery_fee, image, categories
/// (categories pipe-separated). The dishes file:
/// restaurant_id, id, name, description, price, image, calories, rating,
/// category (the last three may be empty).
///
/// With no arguments, checks the embedded demo catalog.
#[derive(Parser, Debug)]
#[command(name = "catalog-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the restaurants CSV file
    #[arg(short, long, requires = "dishes")]
    restaurants: Option<PathBuf>,

    /// Path to the dishes CSV file
    #[arg(short, long, requires = "restaurants")]
    dishes: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = match (&args.restaurants, &args.dishes) {
        (Some(restaurants_path), Some(dishes_path)) => {
            let restaurants_file = File::open(restaurants_path)
                .with_context(|| format!("Failed to open: {}", restaurants_path.display()))?;
            let restaurants = CatalogLoader::parse_restaurants(restaurants_file)
                .with_context(|| format!("Failed to parse: {}", restaurants_path.display()))?;

            let dishes_file = File::open(dishes_path)
                .with_context(|| format!("Failed to open: {}", dishes_path.display()))?;
            let dishes = CatalogLoader::parse_dishes(dishes_file)
                .with_context(|| format!("Failed to parse: {}", dishes_path.display()))?;

            CatalogLoader::assemble(&restaurants, &dishes)
                .context("Failed to assemble catalog")?
        }
        _ => {
            println!("No files given; checking the embedded demo catalog.");
            seed::demo_restaurants().context("Embedded demo catalog is invalid")?
        }
    };

    let dish_count: usize = catalog.iter().map(|r| r.menu.len()).sum();
    println!(
        "Catalog OK: {} restaurants, {} dishes.",
        catalog.len(),
        dish_count
    );
    for restaurant in &catalog {
        println!(
            "  {} — {} dishes, rating {}, delivery {}",
            restaurant.name,
            restaurant.menu.len(),
            restaurant.rating,
            restaurant.delivery_time
        );
    }

    Ok(())
}
