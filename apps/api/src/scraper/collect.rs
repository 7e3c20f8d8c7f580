use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use crate::corpus::Corpus;
use crate::models::club::ClubRecord;
use crate::scraper::{DirectoryApi, ScrapeError};

/// Paging and pacing for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub page_size: u64,
    /// Pause between list pages.
    pub list_delay: Duration,
    /// Pause between detail fetches.
    pub detail_delay: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            page_size: 50,
            list_delay: Duration::from_millis(250),
            detail_delay: Duration::from_millis(100),
        }
    }
}

/// Projects a directory detail object onto a `ClubRecord`.
/// Returns `None` when the detail is not an object.
pub fn extract_clean_club_data(detail: &Value, club_id: &str) -> Option<ClubRecord> {
    if !detail.is_object() {
        return None;
    }
    match serde_json::from_value::<ClubRecord>(detail.clone()) {
        Ok(club) => Some(club.normalized(club_id)),
        Err(e) => {
            warn!("Could not read details for ID {club_id}: {e}");
            None
        }
    }
}

/// Walks every list page, then fetches each organization's details.
///
/// A failing list page aborts the run. A failing detail fetch is logged and
/// that organization is skipped; nothing is retried.
pub async fn scrape_all_clubs(
    api: &dyn DirectoryApi,
    options: &ScrapeOptions,
) -> Result<Corpus, ScrapeError> {
    info!("Starting club scraping...");

    let first_page = api.fetch_list_page(0, options.page_size).await?;
    let total_count = first_page.total_count.unwrap_or(0);
    info!("Total clubs reported: {total_count}");

    let mut all_ids: Vec<String> = Vec::new();
    let mut skip = 0;
    loop {
        let page = api.fetch_list_page(skip, options.page_size).await?;
        if page.value.is_empty() {
            break;
        }

        all_ids.extend(page.value.iter().filter_map(|org| org.id_string()));
        info!(
            "Collected IDs {skip}-{} (total so far: {})",
            skip + options.page_size,
            all_ids.len()
        );

        skip += options.page_size;
        if skip >= total_count {
            break;
        }
        tokio::time::sleep(options.list_delay).await;
    }
    info!("Finished collecting {} organization IDs.", all_ids.len());

    let mut clubs = Vec::with_capacity(all_ids.len());
    for (idx, club_id) in all_ids.iter().enumerate() {
        info!("Fetching details {}/{} -> ID {club_id}", idx + 1, all_ids.len());
        match api.fetch_club_detail(club_id).await {
            Ok(Some(detail)) => {
                if let Some(club) = extract_clean_club_data(&detail, club_id) {
                    // Key by the listed id even if the detail disagrees.
                    clubs.push(ClubRecord {
                        id: Some(club_id.clone()),
                        ..club
                    });
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to fetch details for ID {club_id}: {e}"),
        }
        tokio::time::sleep(options.detail_delay).await;
    }

    Ok(clubs.into_iter().collect())
}
