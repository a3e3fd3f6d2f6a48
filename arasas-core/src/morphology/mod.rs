//! Morphological analysis and disambiguation

pub mod database;
pub mod mle;

pub use database::MorphologyDb;
pub use mle::MleDisambiguator;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Part-of-speech assigned to punctuation and symbols
pub const POS_PUNCTUATION: &str = "punc";
/// Part-of-speech assigned to numerals written in digits
pub const POS_DIGIT: &str = "digit";

/// One candidate morphological analysis of a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub pos: String,
    /// Lemma signature, possibly carrying `-`/`_` markers
    pub lemma: String,
    pub gloss: String,
    /// Model score, higher is better
    pub score: f64,
}

/// A word together with its candidate analyses, best first
#[derive(Debug, Clone, PartialEq)]
pub struct DisambiguatedWord {
    pub word: String,
    pub analyses: Vec<Analysis>,
}

impl DisambiguatedWord {
    /// The top-ranked analysis, if any
    pub fn best(&self) -> Option<&Analysis> {
        self.analyses.first()
    }
}

/// Contextual morphological disambiguation service
pub trait Disambiguator: Send + Sync {
    /// Rank the analyses of every word of a sentence
    ///
    /// The output has one entry per input word, in input order.
    fn disambiguate(&self, words: &[String]) -> Result<Vec<DisambiguatedWord>>;

    /// Name of this disambiguator (for logging)
    fn name(&self) -> &'static str;
}

/// Arabic diacritics (harakat, tanwin, shadda, sukun, dagger alef) and tatweel
pub fn is_diacritic(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}

/// Remove diacritics and tatweel from `word`
pub fn dediacritize(word: &str) -> String {
    word.chars().filter(|&ch| !is_diacritic(ch)).collect()
}
