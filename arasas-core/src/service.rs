//! Helpers for hosts that serve annotation requests
//!
//! A host builds one [`AnnotationService`] at startup and shares it between
//! request handlers. Request text is capped at [`WORDS_LIMIT`] words.

use crate::annotator::{AnnotateOptions, Annotator};
use crate::config::AnnotatorConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::metrics::Metrics;
use crate::output::OutputFormat;
use crate::types::AnnotationResult;
use serde::Serialize;
use std::sync::Arc;

/// Maximum number of space-separated words annotated per request
pub const WORDS_LIMIT: usize = 100_000;

/// Keep at most `limit` space-separated words of `text`
///
/// Words are the pieces between single ASCII spaces, so runs of spaces
/// count as empty words.
pub fn truncate_words(text: &str, limit: usize) -> &str {
    if limit == 0 {
        return "";
    }
    match text.match_indices(' ').nth(limit - 1) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Serialize a value as JSON with four-space indentation
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Metrics as the JSON log document
pub fn metrics_json(metrics: &Metrics) -> Result<String> {
    to_pretty_json(metrics)
}

/// A preloaded annotator and lexicon shared by request handlers
#[derive(Debug, Clone)]
pub struct AnnotationService {
    annotator: Arc<Annotator>,
    lexicon: Arc<Lexicon>,
    words_limit: usize,
}

impl AnnotationService {
    /// Wrap an annotator and lexicon
    pub fn new(annotator: Arc<Annotator>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            annotator,
            lexicon,
            words_limit: WORDS_LIMIT,
        }
    }

    /// Initialize everything from configuration
    pub fn from_config(config: &AnnotatorConfig) -> Result<Self> {
        let annotator = Annotator::from_config(config)?;
        let lexicon = Lexicon::from_file(&config.resources.lexicon)?;
        log::info!(
            "Service ready with {} lexicon entries from {}",
            lexicon.len(),
            config.resources.lexicon.display()
        );
        Ok(Self::new(Arc::new(annotator), Arc::new(lexicon)))
    }

    /// Override the per-request word cap
    pub fn with_words_limit(mut self, limit: usize) -> Self {
        self.words_limit = limit;
        self
    }

    /// Current per-request word cap
    pub fn words_limit(&self) -> usize {
        self.words_limit
    }

    /// Annotate one request; `style` of `None` means vertical
    pub fn handle(&self, text: &str, style: Option<&str>) -> Result<AnnotationResult> {
        let options = AnnotateOptions::new(OutputFormat::from_option(style)?);
        let text = truncate_words(text, self.words_limit);
        self.annotator.annotate(text, &self.lexicon, &options)
    }
}
