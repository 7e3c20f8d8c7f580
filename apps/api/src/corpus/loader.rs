use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::corpus::Corpus;
use crate::models::club::ClubRecord;

/// Loads the club corpus from a JSON file shaped `{ "<id>": { ...club fields } }`.
///
/// Never fails: an unreadable or malformed file yields an empty corpus
/// and a warning, so the service can still start and answer with no matches.
pub fn load_corpus(path: impl AsRef<Path>) -> Corpus {
    let path = path.as_ref();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not read club data from {}: {e}", path.display());
            return Corpus::default();
        }
    };

    let corpus = parse_corpus(&raw).unwrap_or_else(|reason| {
        warn!("Ignoring club data in {}: {reason:#}", path.display());
        Corpus::default()
    });

    if corpus.is_empty() {
        warn!("No clubs loaded from {}; every request will return no matches", path.display());
    } else {
        info!("Loaded {} clubs from {}", corpus.len(), path.display());
    }
    corpus
}

/// Parses the persisted corpus document. Only the top level is validated.
fn parse_corpus(raw: &str) -> Result<Corpus> {
    let document: Value = serde_json::from_str(raw).context("malformed JSON")?;

    let Value::Object(entries) = document else {
        bail!("top level is not an object");
    };

    let mut clubs = BTreeMap::new();
    for (key, value) in entries {
        if !value.is_object() {
            warn!("Skipping club entry {key}: not an object");
            continue;
        }
        match serde_json::from_value::<ClubRecord>(value) {
            Ok(club) => {
                clubs.insert(key.clone(), club.normalized(&key));
            }
            Err(e) => warn!("Skipping club entry {key}: {e}"),
        }
    }

    Ok(Corpus::new(clubs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_success() {
        let file = write_temp(r#"{"1": {"name": "Test Club"}}"#);
        let corpus = load_corpus(file.path());
        assert_eq!(corpus.len(), 1);
        let club = corpus.get("1").unwrap();
        assert_eq!(club.name.as_deref(), Some("Test Club"));
        assert_eq!(club.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_file_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = load_corpus(dir.path().join("does_not_exist.json"));
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_malformed_json_yields_empty_corpus() {
        let file = write_temp("{ not json");
        assert!(load_corpus(file.path()).is_empty());
    }

    #[test]
    fn test_non_object_top_level_yields_empty_corpus() {
        let file = write_temp(r#"[{"name": "Listed Club"}]"#);
        assert!(load_corpus(file.path()).is_empty());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let file = write_temp(r#"{"1": {"name": "Kept"}, "2": "junk", "3": 7}"#);
        let corpus = load_corpus(file.path());
        assert_eq!(corpus.len(), 1);
        assert!(corpus.get("1").is_some());
    }

    #[test]
    fn test_record_with_raw_and_cleaned_description_is_kept() {
        let file = write_temp(
            r#"{"1": {"name": "Robotics Club", "description": "<p>raw</p>", "description_html": "<p>clean</p>"}}"#,
        );
        let corpus = load_corpus(file.path());
        assert_eq!(corpus.len(), 1);
        assert_eq!(
            corpus.get("1").unwrap().description_html.as_deref(),
            Some("<p>clean</p>")
        );
    }

    #[test]
    fn test_names_are_trimmed_on_load() {
        let file = write_temp(r#"{"9": {"id": "9", "name": "  Spaced Club \n"}}"#);
        let corpus = load_corpus(file.path());
        assert_eq!(corpus.get("9").unwrap().name.as_deref(), Some("Spaced Club"));
    }

    #[test]
    fn test_reads_scraper_description_key() {
        let file = write_temp(
            r#"{"1": {"name": "Robotics Club", "description_html": "<p>robots</p>"}}"#,
        );
        let corpus = load_corpus(file.path());
        assert_eq!(
            corpus.get("1").unwrap().description_html.as_deref(),
            Some("<p>robots</p>")
        );
    }
}
