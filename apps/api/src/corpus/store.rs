use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::corpus::Corpus;

/// Writes the corpus as a JSON object keyed by club id, indented with four spaces.
/// The output is exactly what `load_corpus` reads back.
pub fn save_corpus(path: impl AsRef<Path>, corpus: &Corpus) -> Result<()> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    corpus
        .serialize(&mut serializer)
        .context("Failed to serialize club corpus")?;

    std::fs::write(path, buf)
        .with_context(|| format!("Failed to write club data to {}", path.display()))?;

    info!("Saved {} clubs to {}", corpus.len(), path.display());
    Ok(())
}
