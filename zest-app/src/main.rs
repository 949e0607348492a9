use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zest_app::{demo, AppConfig, SessionController};
use zest_core::pricing::format_usd;
use zest_core::provider::{CatalogProvider, RecommendationProvider};
use zest_data::StaticCatalog;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// ZEST food delivery — catalog browsing, AI dish recommendations, and a
/// simulated delivery timeline, driven from the command line.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "zest.toml")]
    config: PathBuf,

    /// Recommendation backend to use (overrides the config file).
    #[arg(long)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the restaurant catalog.
    Menu,
    /// Ask the recommendation provider for dish suggestions.
    Recommend { query: String },
    /// Run a scripted ordering session end to end.
    Demo {
        /// Craving query for the recommendation step of the walkthrough.
        #[arg(long)]
        query: Option<String>,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(backend) = cli.backend {
        config.ai.backend = backend;
    }

    let catalog = StaticCatalog::demo()?;

    match cli.command {
        Command::Menu => {
            let restaurants = catalog.restaurants().await?;
            for restaurant in &restaurants {
                info!(
                    "{} — rating {}, {} delivery, fee {}",
                    restaurant.name,
                    restaurant.rating,
                    restaurant.delivery_time,
                    format_usd(restaurant.delivery_fee)
                );
                for dish in &restaurant.menu {
                    info!("    {} — {}", dish.name, format_usd(dish.price));
                }
            }
        }
        Command::Recommend { query } => {
            debug!("using '{}' backend", config.ai.backend);
            let registry = zest_ai::build_registry();
            let provider = registry.create(&config.provider_config()).await?;
            match provider.recommend(&query).await {
                Ok(dishes) if dishes.is_empty() => info!("no suggestions for \"{query}\""),
                Ok(dishes) => {
                    for dish in dishes {
                        info!(
                            "{} — {} ({})",
                            dish.name,
                            format_usd(dish.price),
                            dish.category.as_deref().unwrap_or("Uncategorized")
                        );
                    }
                }
                Err(error) => {
                    // Non-fatal by contract: an outage means no
                    // suggestions, never a crash.
                    tracing::warn!(%error, "recommendation lookup failed");
                    info!("no suggestions for \"{query}\"");
                }
            }
        }
        Command::Demo { query } => {
            debug!("using '{}' backend", config.ai.backend);
            let registry = zest_ai::build_registry();
            let provider = registry.create(&config.provider_config()).await?;
            let mut controller =
                SessionController::new(Arc::from(provider), config.delivery_fee());
            demo::run(&mut controller, &catalog, query).await?;
        }
    }

    Ok(())
}
