//! Synonym lookup over a WordNet-style database.
//!
//! The on-disk format is gzip-compressed, tab-separated text: one headword
//! per line, a comma-separated synonym list, and optionally a third field
//! of related words (hypernyms and near-synonyms) used when similar-word
//! expansion is requested. The database is decompressed once per process
//! and shared read-only afterwards; a missing word is an empty set, never
//! an error.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SynonymsError {
    #[error("failed to read synonym database: {0}")]
    Io(#[from] std::io::Error),
}

/// A synonym provider.
pub trait Synonyms: Send + Sync {
    /// Synonyms of `word`, excluding the word itself.
    fn get(&self, word: &str) -> BTreeSet<String>;

    /// Related words (broader or nearby senses), for similar-word
    /// expansion. Defaults to empty.
    fn related(&self, _word: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

#[derive(Debug, Default)]
struct DbEntry {
    synonyms: Vec<String>,
    related: Vec<String>,
}

/// The default provider, loaded from a compressed database file.
#[derive(Debug, Default)]
pub struct WordNetDb {
    entries: HashMap<String, DbEntry>,
}

impl WordNetDb {
    /// Read a gzip-compressed database. Blocks on disk I/O, so call it
    /// once at startup (or on first use) and share the handle.
    pub fn open(path: &Path) -> Result<WordNetDb, SynonymsError> {
        let reader = BufReader::new(GzDecoder::new(File::open(path)?));
        let mut entries = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let Some(word) = fields.next() else { continue };
            let split = |field: Option<&str>| -> Vec<String> {
                field
                    .map(|f| {
                        f.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default()
            };
            entries.insert(
                word.to_string(),
                DbEntry {
                    synonyms: split(fields.next()),
                    related: split(fields.next()),
                },
            );
        }
        info!(words = entries.len(), "synonym database loaded");
        Ok(WordNetDb { entries })
    }

    /// An empty provider, for when no database is configured.
    pub fn empty() -> WordNetDb {
        WordNetDb::default()
    }
}

impl Synonyms for WordNetDb {
    fn get(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(word)
            .map(|entry| {
                entry
                    .synonyms
                    .iter()
                    .filter(|s| s.as_str() != word)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn related(&self, word: &str) -> BTreeSet<String> {
        self.entries
            .get(word)
            .map(|entry| entry.related.iter().cloned().collect())
            .unwrap_or_default()
    }
}
