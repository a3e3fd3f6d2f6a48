//! Vertical (one token per line) formatter

use super::{join_lines, OutputFormatter};
use crate::types::Sentence;

/// Vertical formatter - `pos \t form \t tags`, blank line after each sentence
#[derive(Debug, Default)]
pub struct VerticalFormatter {
    pieces: Vec<String>,
}

impl VerticalFormatter {
    /// Create a new vertical formatter
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputFormatter for VerticalFormatter {
    fn format_sentence(&mut self, sentence: &Sentence) {
        for token in &sentence.tokens {
            self.pieces.push(format!(
                "{}\t{}\t{}",
                token.pos, token.form, token.semantic_tags
            ));
        }
        self.pieces.push("\n".to_string());
    }

    fn finish(&mut self) -> String {
        join_lines(&std::mem::take(&mut self.pieces))
    }
}
