//! Directory scraper — builds the club corpus from the university's
//! organization directory API.
//!
//! All directory calls go through a `DirectoryApi` so the collection loop can
//! be exercised without the network.

pub mod client;
pub mod collect;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use client::HttpDirectoryClient;
pub use collect::{extract_clean_club_data, scrape_all_clubs, ScrapeOptions};

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Directory API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One page of the organization search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationPage {
    #[serde(rename = "@odata.count", default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub value: Vec<OrganizationSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationSummary {
    #[serde(rename = "Id")]
    pub id: Value,
}

impl OrganizationSummary {
    /// The id as used in detail URLs and as the corpus key.
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetches one page of organizations ordered by name.
    async fn fetch_list_page(&self, skip: u64, top: u64) -> Result<OrganizationPage, ScrapeError>;

    /// Fetches the full detail object for one organization.
    /// `Ok(None)` means the directory did not return it; callers skip it.
    async fn fetch_club_detail(&self, club_id: &str) -> Result<Option<Value>, ScrapeError>;
}
