//! Interactive terminal client for a running recommendation API.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::recommender::{ClubRecommendation, UserData};
use crate::routes::recommend::RecommendationsResponse;

/// Asks for interests (unless given), queries the API and prints the results.
/// API failures are reported to the user, not returned as errors.
pub async fn run(api_url: &str, interests: Option<String>) -> Result<()> {
    println!("Club Match AI - CLI Version");

    let interests = match interests {
        Some(interests) => interests.trim().to_string(),
        None => prompt_interests()?,
    };

    if interests.is_empty() {
        println!("You must enter at least one interest.");
        return Ok(());
    }

    println!("\nRequesting recommendations...\n");

    match fetch_recommendations(api_url, &interests).await {
        Ok(recommendations) => print!("{}", render_recommendations(&recommendations)),
        Err(e) => println!("Error contacting API: {e:#}"),
    }
    Ok(())
}

fn prompt_interests() -> Result<String> {
    println!("Type your interests (example: engineering, robotics, art):");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read interests from stdin")?;
    Ok(line.trim().to_string())
}

async fn fetch_recommendations(api_url: &str, interests: &str) -> Result<Vec<ClubRecommendation>> {
    let url = format!("{api_url}/api/v1/recommend");
    debug!("POST {url}");

    let response = Client::new()
        .post(&url)
        .json(&UserData::new(interests))
        .send()
        .await?
        .error_for_status()?;

    let body: RecommendationsResponse = response.json().await?;
    Ok(body.recommendations)
}

/// Formats results as a numbered list, with placeholders for missing fields.
pub fn render_recommendations(recommendations: &[ClubRecommendation]) -> String {
    if recommendations.is_empty() {
        return "No clubs matched your interests.\n".to_string();
    }

    let mut out = String::from("Recommended Clubs:\n");
    for (i, club) in recommendations.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {}\n   Short Name: {}\n   Summary: {}\n",
            i + 1,
            club.name.as_deref().unwrap_or("Unknown Club"),
            club.short_name.as_deref().unwrap_or("N/A"),
            club.summary.as_deref().unwrap_or("No summary available."),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_recommendations(&[]), "No clubs matched your interests.\n");
    }

    #[test]
    fn test_render_numbered_with_placeholders() {
        let recs = vec![
            ClubRecommendation {
                name: Some("Robotics Club".to_string()),
                short_name: Some("Robotics".to_string()),
                summary: Some("We build cool robots.".to_string()),
            },
            ClubRecommendation {
                name: None,
                short_name: None,
                summary: None,
            },
        ];

        assert_eq!(
            render_recommendations(&recs),
            "Recommended Clubs:\n\
             \n1. Robotics Club\n   Short Name: Robotics\n   Summary: We build cool robots.\n\
             \n2. Unknown Club\n   Short Name: N/A\n   Summary: No summary available.\n"
        );
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        // Reserve a port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = fetch_recommendations(&format!("http://127.0.0.1:{port}"), "robotics").await;
        assert!(result.is_err());
    }
}
