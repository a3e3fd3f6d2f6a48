//! Line filtering and sentence segmentation

pub mod rules;
pub mod splitter;

pub use rules::{RulesConfig, SplitRules};
pub use splitter::{RuleSource, RuleSplitter};

use crate::error::Result;
use std::sync::Arc;

/// Sentence segmentation service
pub trait SentenceSplitter: Send + Sync {
    /// Split a single line into sentences
    fn split(&self, line: &str) -> Result<Vec<String>>;

    /// Make the splitter's resources available; calling it again is a no-op
    fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Name of this splitter (for logging)
    fn name(&self) -> &'static str;
}

/// Arabic question mark, normalized to ASCII before splitting
pub const ARABIC_QUESTION_MARK: char = '\u{061F}';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Turns raw text into an ordered list of sentences
#[derive(Clone)]
pub struct Segmenter {
    splitter: Arc<dyn SentenceSplitter>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("splitter", &self.splitter.name())
            .finish()
    }
}

impl Segmenter {
    /// Create a segmenter over the given splitter
    pub fn new(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self { splitter }
    }

    /// Segment `text` into sentences, skipping `#` comment lines
    ///
    /// If the splitter reports a missing resource, it is made ready once and
    /// the failing line is retried once; a second failure is returned.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        let text = normalize(text);
        let mut sentences = Vec::new();
        let mut retried = false;

        for line in text.split('\n') {
            if line.trim().starts_with('#') {
                continue;
            }

            match self.splitter.split(line) {
                Ok(found) => sentences.extend(found),
                Err(e) if e.is_resource_missing() && !retried => {
                    log::warn!("{e}; preparing splitter '{}' and retrying", self.splitter.name());
                    retried = true;
                    self.splitter.ensure_ready()?;
                    sentences.extend(self.splitter.split(line)?);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(sentences)
    }
}

/// Replace the Arabic question mark and drop byte order marks
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&ch| ch != BYTE_ORDER_MARK)
        .map(|ch| if ch == ARABIC_QUESTION_MARK { '?' } else { ch })
        .collect()
}
