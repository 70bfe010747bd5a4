use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use platefinder_common::{EngineConfig, ModelTier, ResponseLanguage, SearchRequest};
use platefinder_engine::DiscoveryEngine;

/// Grounded restaurant discovery from the command line.
#[derive(Parser)]
struct Args {
    /// Craving to search for, e.g. "late night ramen"
    query: String,

    /// Caller latitude in degrees
    #[arg(long)]
    lat: f64,

    /// Caller longitude in degrees
    #[arg(long)]
    lng: f64,

    /// Attribute filter tag, repeatable (e.g. --filter vegan)
    #[arg(long = "filter")]
    filters: Vec<String>,

    /// Use the elevated model tier
    #[arg(long)]
    elevated: bool,

    /// Language code for pros/cons text
    #[arg(long, default_value = "en")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("platefinder_engine=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut request = SearchRequest::new(args.lat, args.lng, args.query);
    request.filters = args.filters;
    request.tier = if args.elevated {
        ModelTier::Elevated
    } else {
        ModelTier::Standard
    };
    request.language = ResponseLanguage::new(args.lang);

    let engine = DiscoveryEngine::gemini(EngineConfig::from_env());

    match engine.discover(&request).await {
        Ok(results) => {
            info!(count = results.len(), "Discovery finished");
            for (i, restaurant) in results.iter().enumerate() {
                println!(
                    "{}. {} [{:.1}] ({} reviews)",
                    i + 1,
                    restaurant.name,
                    restaurant.quality_score,
                    restaurant.review_count
                );
                println!("   + {}", restaurant.pros.join("; "));
                println!("   - {}", restaurant.cons.join("; "));
                println!("   {}", restaurant.maps_uri);
            }
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
