use anyhow::{ensure, Context, Result};

pub const DEFAULT_CLUBS_FILE: &str = "gobblerconnect_clubs.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub clubs_file: String,
    pub port: u16,
    pub recommend_limit: usize,
    pub api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let recommend_limit = env_or("RECOMMEND_LIMIT", "10")
            .parse::<usize>()
            .context("RECOMMEND_LIMIT must be a non-negative integer")?;
        ensure!(recommend_limit >= 1, "RECOMMEND_LIMIT must be at least 1");

        Ok(Config {
            clubs_file: env_or("CLUBS_FILE", DEFAULT_CLUBS_FILE),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            recommend_limit,
            api_url: env_or("API_URL", "http://localhost:8000")
                .trim_end_matches('/')
                .to_string(),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
