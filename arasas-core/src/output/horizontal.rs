//! Horizontal (running text) formatter

use super::OutputFormatter;
use crate::types::Sentence;

/// Horizontal formatter - `form_TAG` tokens separated by spaces
///
/// Only the first tag code is kept and sentence boundaries are not marked.
#[derive(Debug, Default)]
pub struct HorizontalFormatter {
    buffer: String,
}

impl HorizontalFormatter {
    /// Create a new horizontal formatter
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputFormatter for HorizontalFormatter {
    fn format_sentence(&mut self, sentence: &Sentence) {
        for token in &sentence.tokens {
            self.buffer.push_str(&token.form);
            if let Some(tag) = token.primary_tag() {
                self.buffer.push('_');
                self.buffer.push_str(tag);
            }
            self.buffer.push(' ');
        }
    }

    fn finish(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        text.trim_end().to_string()
    }
}
