//! Tab-separated morphology database
//!
//! Each line reads `form \t pos \t lemma \t gloss [\t score]`. A first column
//! of `form` marks a header line; blank lines and `#` comments are skipped.

use super::{dediacritize, Analysis};
use crate::error::{AnnotateError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const MIN_COLUMNS: usize = 4;

/// In-memory form-to-analyses index
#[derive(Debug, Clone, Default)]
pub struct MorphologyDb {
    entries: HashMap<String, Vec<Analysis>>,
    bare: HashMap<String, Vec<Analysis>>,
}

impl MorphologyDb {
    /// Parse database content
    pub fn parse(content: &str) -> Result<Self> {
        let mut db = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
            if columns[0].eq_ignore_ascii_case("form") {
                continue;
            }
            if columns.len() < MIN_COLUMNS {
                return Err(AnnotateError::MalformedDatabase {
                    line: idx + 1,
                    reason: format!(
                        "expected at least {MIN_COLUMNS} tab-separated columns, found {}",
                        columns.len()
                    ),
                });
            }

            let score = match columns.get(4).filter(|s| !s.is_empty()) {
                Some(raw) => parse_score(raw).map_err(|reason| AnnotateError::MalformedDatabase {
                    line: idx + 1,
                    reason,
                })?,
                None => 0.0,
            };

            db.insert(
                columns[0],
                Analysis {
                    pos: columns[1].to_string(),
                    lemma: columns[2].to_string(),
                    gloss: columns[3].to_string(),
                    score,
                },
            );
        }

        log::debug!("Parsed morphology database with {} forms", db.len());
        Ok(db)
    }

    /// Read and parse a database file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| AnnotateError::file_access(path, e))?;
        Self::parse(&content)
    }

    /// Register an analysis for `form`
    pub fn insert(&mut self, form: &str, analysis: Analysis) {
        let bare = dediacritize(form);
        if bare != form {
            self.bare
                .entry(bare)
                .or_default()
                .push(analysis.clone());
        }
        self.entries
            .entry(form.to_string())
            .or_default()
            .push(analysis);
    }

    /// Analyses for `form`, falling back to its undiacritized spelling
    pub fn analyses(&self, form: &str) -> &[Analysis] {
        if let Some(found) = self.entries.get(form) {
            return found;
        }
        let bare = dediacritize(form);
        self.entries
            .get(&bare)
            .or_else(|| self.bare.get(&bare))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scores must be finite so analyses can be ranked
fn parse_score(raw: &str) -> std::result::Result<f64, String> {
    let score = raw
        .parse::<f64>()
        .map_err(|e| format!("invalid score '{raw}': {e}"))?;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(format!("invalid score '{raw}': not a finite number"))
    }
}
