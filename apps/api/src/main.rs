mod cli;
mod config;
mod corpus;
mod errors;
mod models;
mod recommender;
mod routes;
mod scraper;
mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::{load_corpus, save_corpus};
use crate::recommender::{KeywordMatchStrategy, RecommenderContext};
use crate::routes::build_router;
use crate::scraper::{scrape_all_clubs, HttpDirectoryClient, ScrapeOptions};
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
    name = "club-match",
    about = "Recommends student clubs from free-text interests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the recommendation API (default).
    Serve,
    /// Ask a running API for recommendations.
    Recommend {
        /// Comma-separated interests; prompts on stdin when omitted.
        #[arg(long)]
        interests: Option<String>,
        /// Base URL of the API. Defaults to API_URL.
        #[arg(long, value_name = "url")]
        api_url: Option<String>,
    },
    /// Rebuild the club data file from the organization directory.
    Scrape {
        /// Output file. Defaults to CLUBS_FILE.
        #[arg(long, value_name = "path")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Recommend { interests, api_url } => {
            cli::run(api_url.as_deref().unwrap_or(&config.api_url), interests).await
        }
        Command::Scrape { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.clubs_file));
            let client = HttpDirectoryClient::new()?;
            let corpus = scrape_all_clubs(&client, &ScrapeOptions::default()).await?;
            save_corpus(&output, &corpus)
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Club Match API v{}", env!("CARGO_PKG_VERSION"));

    // Corpus is loaded once and owned by the strategy for the process lifetime.
    let corpus = load_corpus(&config.clubs_file);
    let strategy = KeywordMatchStrategy::with_limit(corpus, config.recommend_limit);
    let recommender = Arc::new(RecommenderContext::new(Box::new(strategy)));
    info!(
        "Recommender initialized (strategy: {}, limit: {})",
        recommender.strategy_name(),
        config.recommend_limit
    );

    let state = AppState { recommender };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
