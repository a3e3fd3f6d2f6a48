//! Core data types shared across the pipeline

use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};

/// A single word of a sentence with its best morphological analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the sentence
    pub form: String,
    /// Part-of-speech of the best analysis (empty when unanalyzable)
    pub pos: String,
    /// Lemma signature of the best analysis (empty when unanalyzable)
    pub lemma: String,
    /// English gloss of the best analysis (empty when unanalyzable)
    pub gloss: String,
    /// Space-separated semantic tag codes, empty until resolved
    pub semantic_tags: String,
}

impl Token {
    /// Token for a word without any analysis
    pub fn unanalyzed(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            ..Self::default()
        }
    }

    /// First semantic tag code, if any
    pub fn primary_tag(&self) -> Option<&str> {
        self.semantic_tags.split(' ').next().filter(|tag| !tag.is_empty())
    }
}

/// Ordered tokens of one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 1-based position of the sentence in the input
    pub index: usize,
    /// Tokens in sentence order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence
    pub fn new(index: usize, tokens: Vec<Token>) -> Self {
        Self { index, tokens }
    }
}

/// Outcome of one annotate call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationResult {
    /// Rendered output in the requested format
    #[serde(rename = "string")]
    pub formatted: String,
    /// Run metrics
    #[serde(rename = "log")]
    pub metrics: Metrics,
    /// Resolved tokens per sentence
    #[serde(rename = "output")]
    pub sentences: Vec<Sentence>,
}
