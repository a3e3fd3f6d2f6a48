//! Tokenizer and disambiguator adapter
//!
//! Bridges raw sentences to [`Token`]s: words come from the simple word
//! tokenizer and each word keeps only its best-ranked analysis.

use crate::error::{AnnotateError, Result};
use crate::morphology::{Analysis, Disambiguator};
use crate::tokenizer::simple_word_tokenize;
use crate::types::Token;
use std::sync::Arc;

/// Build a token from a word and its ranked analyses
///
/// No analyses is a normal outcome and yields empty `pos`, `lemma` and
/// `gloss`.
pub fn resolve_best(word: &str, analyses: &[Analysis]) -> Token {
    match analyses.first() {
        Some(best) => Token {
            form: word.to_string(),
            pos: best.pos.clone(),
            lemma: best.lemma.clone(),
            gloss: best.gloss.clone(),
            semantic_tags: String::new(),
        },
        None => Token::unanalyzed(word),
    }
}

/// Turns sentences into analyzed tokens
#[derive(Clone)]
pub struct MorphologicalAdapter {
    disambiguator: Arc<dyn Disambiguator>,
}

impl std::fmt::Debug for MorphologicalAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphologicalAdapter")
            .field("disambiguator", &self.disambiguator.name())
            .finish()
    }
}

impl MorphologicalAdapter {
    /// Create an adapter over a ready disambiguator
    pub fn new(disambiguator: Arc<dyn Disambiguator>) -> Self {
        Self { disambiguator }
    }

    /// Split a sentence into words
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        simple_word_tokenize(sentence)
    }

    /// Disambiguate words and keep the best analysis of each
    pub fn analyze(&self, words: &[String]) -> Result<Vec<Token>> {
        let disambiguated = self.disambiguator.disambiguate(words)?;
        if disambiguated.len() != words.len() {
            return Err(AnnotateError::Disambiguation(format!(
                "disambiguator '{}' returned {} analyses for {} words",
                self.disambiguator.name(),
                disambiguated.len(),
                words.len()
            )));
        }

        Ok(disambiguated
            .iter()
            .map(|dw| resolve_best(&dw.word, &dw.analyses))
            .collect())
    }

    /// Tokenize and analyze in one step
    pub fn process(&self, sentence: &str) -> Result<Vec<Token>> {
        self.analyze(&self.tokenize(sentence))
    }
}
