//! Club corpus: the in-memory collection of every known club, keyed by id.
//!
//! Built once at startup (or by the scraper) and never mutated afterwards.

pub mod loader;
pub mod store;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::club::ClubRecord;

pub use loader::load_corpus;
pub use store::save_corpus;

/// Read-only collection of clubs. Iteration is ordered by club id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    clubs: BTreeMap<String, ClubRecord>,
}

impl Corpus {
    pub fn new(clubs: BTreeMap<String, ClubRecord>) -> Self {
        Self { clubs }
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ClubRecord> {
        self.clubs.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClubRecord)> {
        self.clubs.iter().map(|(id, club)| (id.as_str(), club))
    }

    pub fn clubs(&self) -> impl Iterator<Item = &ClubRecord> {
        self.clubs.values()
    }
}

/// Collects records keyed by their own id. Records without an id are dropped.
impl FromIterator<ClubRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = ClubRecord>>(iter: I) -> Self {
        let clubs = iter
            .into_iter()
            .filter_map(|club| club.id.clone().map(|id| (id, club)))
            .collect();
        Self { clubs }
    }
}
