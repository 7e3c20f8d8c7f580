use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::scraper::{DirectoryApi, OrganizationPage, ScrapeError};

pub const BASE_SEARCH_URL: &str = "https://gobblerconnect.vt.edu/api/discovery/search/organizations";
pub const BASE_DETAIL_URL: &str = "https://gobblerconnect.vt.edu/api/discovery/organization";

/// reqwest-backed client for the organization directory.
#[derive(Clone)]
pub struct HttpDirectoryClient {
    client: Client,
    search_url: String,
    detail_url: String,
}

impl HttpDirectoryClient {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_base_urls(BASE_SEARCH_URL, BASE_DETAIL_URL)
    }

    pub fn with_base_urls(search_url: &str, detail_url: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            search_url: search_url.to_string(),
            detail_url: detail_url.trim_end_matches('/').to_string(),
        })
    }

    fn detail_url_for(&self, club_id: &str) -> String {
        format!("{}/{club_id}", self.detail_url)
    }
}

/// Query parameters for the search endpoint.
fn list_page_params(skip: u64, top: u64) -> Vec<(&'static str, String)> {
    vec![
        ("orderBy[0]", "UpperName asc".to_string()),
        ("top", top.to_string()),
        ("filter", String::new()),
        ("query", String::new()),
        ("skip", skip.to_string()),
    ]
}

#[async_trait]
impl DirectoryApi for HttpDirectoryClient {
    async fn fetch_list_page(&self, skip: u64, top: u64) -> Result<OrganizationPage, ScrapeError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&list_page_params(skip, top))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: OrganizationPage = response.json().await?;
        debug!("List page skip={skip} returned {} organizations", page.value.len());
        Ok(page)
    }

    async fn fetch_club_detail(&self, club_id: &str) -> Result<Option<Value>, ScrapeError> {
        let response = self.client.get(self.detail_url_for(club_id)).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            warn!(
                "Failed to fetch details for ID {club_id} (status {})",
                response.status()
            );
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_page_params() {
        let params = list_page_params(100, 50);
        assert_eq!(
            params,
            vec![
                ("orderBy[0]", "UpperName asc".to_string()),
                ("top", "50".to_string()),
                ("filter", String::new()),
                ("query", String::new()),
                ("skip", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_detail_url_for() {
        let client = HttpDirectoryClient::with_base_urls("http://s", "http://d/org/").unwrap();
        assert_eq!(client.detail_url_for("123"), "http://d/org/123");
    }

    #[test]
    fn test_default_urls() {
        let client = HttpDirectoryClient::new().unwrap();
        assert_eq!(
            client.detail_url_for("abc"),
            "https://gobblerconnect.vt.edu/api/discovery/organization/abc"
        );
    }
}
