//! Maximum-likelihood disambiguator over a [`MorphologyDb`]

use super::{Analysis, DisambiguatedWord, Disambiguator, MorphologyDb, POS_DIGIT, POS_PUNCTUATION};
use crate::error::Result;
use crate::tokenizer::{is_digits, is_punctuation};
use std::sync::Arc;

/// Ranks each word's database analyses by score
///
/// Words missing from the database still get an analysis when they are
/// punctuation or plain digits, so those classes survive into tagging.
#[derive(Debug, Clone)]
pub struct MleDisambiguator {
    db: Arc<MorphologyDb>,
}

impl MleDisambiguator {
    /// Create a disambiguator over a loaded database
    pub fn new(db: Arc<MorphologyDb>) -> Self {
        Self { db }
    }

    /// The underlying database
    pub fn database(&self) -> &MorphologyDb {
        &self.db
    }

    fn rank(&self, word: &str) -> Vec<Analysis> {
        let mut analyses = self.db.analyses(word).to_vec();
        if analyses.is_empty() {
            if let Some(pos) = backoff_pos(word) {
                analyses.push(Analysis {
                    pos: pos.to_string(),
                    lemma: word.to_string(),
                    gloss: word.to_string(),
                    score: 0.0,
                });
            }
        }
        // Stable sort keeps database order among equal scores
        analyses.sort_by(|a, b| b.score.total_cmp(&a.score));
        analyses
    }
}

fn backoff_pos(word: &str) -> Option<&'static str> {
    if is_punctuation(word) {
        Some(POS_PUNCTUATION)
    } else if is_digits(word) {
        Some(POS_DIGIT)
    } else {
        None
    }
}

impl Disambiguator for MleDisambiguator {
    fn disambiguate(&self, words: &[String]) -> Result<Vec<DisambiguatedWord>> {
        Ok(words
            .iter()
            .map(|word| DisambiguatedWord {
                word: word.clone(),
                analyses: self.rank(word),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "mle"
    }
}
