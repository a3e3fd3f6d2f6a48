//! Lemma-to-tag lexicon loading
//!
//! A lexicon is a tab-separated text resource whose lines read
//! `lemma \t tags \t marker \t ...`. Each line is stored under the key
//! `lemma + marker`. A line whose first column is `lemma` (any case) is a
//! header and is skipped, blank lines are ignored, and any other line with
//! fewer than three columns fails the whole load.

use crate::error::{AnnotateError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const HEADER_COLUMN: &str = "lemma";
const MIN_COLUMNS: usize = 3;

/// Mapping from lemma signature to space-separated semantic tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Parse lexicon content; later duplicate keys overwrite earlier ones
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns[0].trim().eq_ignore_ascii_case(HEADER_COLUMN) {
                continue;
            }
            if columns.len() < MIN_COLUMNS {
                return Err(AnnotateError::MalformedLexicon {
                    line: idx + 1,
                    columns: columns.len(),
                });
            }

            let key = format!("{}{}", columns[0].trim(), columns[2].trim());
            entries.insert(key, columns[1].trim().to_string());
        }

        log::debug!("Parsed lexicon with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Read and parse a lexicon file (UTF-8)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| AnnotateError::file_access(path, e))?;
        Self::parse(&content)
    }

    /// Tags stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
