//! XML word-element formatter

use super::{join_lines, OutputFormatter};
use crate::types::Sentence;

/// XML formatter - `<w id="s.i" pos=".." sem="..">form</w>` per token
#[derive(Debug, Default)]
pub struct XmlFormatter {
    full_tags: bool,
    pieces: Vec<String>,
}

impl XmlFormatter {
    /// Create a new XML formatter; `full_tags` keeps every tag code in `sem`
    pub fn new(full_tags: bool) -> Self {
        Self {
            full_tags,
            pieces: Vec::new(),
        }
    }
}

impl OutputFormatter for XmlFormatter {
    fn format_sentence(&mut self, sentence: &Sentence) {
        for (idx, token) in sentence.tokens.iter().enumerate() {
            let sem = if self.full_tags {
                token.semantic_tags.as_str()
            } else {
                token.primary_tag().unwrap_or("")
            };
            self.pieces.push(format!(
                r#"<w id="{}.{}" pos="{}" sem="{}">{}</w>"#,
                sentence.index,
                idx + 1,
                escape(&token.pos),
                escape(sem),
                escape(&token.form)
            ));
        }
        self.pieces.push("\n".to_string());
    }

    fn finish(&mut self) -> String {
        join_lines(&std::mem::take(&mut self.pieces))
    }
}

/// Escape XML special characters
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
