//! Tiered semantic tag lookup
//!
//! Tiers, first hit wins:
//! 1. full lemma signature in the lexicon
//! 2. lemma with `-`/`_` markers stripped in the lexicon
//! 3. surface form in the lexicon
//! 4. digit part-of-speech or an all-digit form: numeral tags
//! 5. punctuation part-of-speech: [`PUNCTUATION_TAG`]
//! 6. otherwise: [`PLACEHOLDER_TAG`]
//!
//! A lexicon hit whose value is the placeholder does not count as a hit.

use crate::lexicon::Lexicon;
use crate::metrics::{MetricsCollector, TagOutcome};
use crate::morphology::{POS_DIGIT, POS_PUNCTUATION};
use crate::tokenizer::is_digits;
use crate::types::Token;

/// Tag meaning "no semantic category found"
pub const PLACEHOLDER_TAG: &str = "Z99";
/// Tag given to punctuation tokens
pub const PUNCTUATION_TAG: &str = "PUNC";
/// Tag set for numerals
pub const NUMERAL_TAGS: &str = "N1 T1.2 T3 T1.3 N3.2";

/// Which tier produced a token's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    Lemma,
    StrippedLemma,
    SurfaceForm,
    Numeral,
    Punctuation,
    Untagged,
}

impl TagSource {
    /// Metrics bucket for this source
    pub fn outcome(self) -> TagOutcome {
        match self {
            TagSource::Punctuation => TagOutcome::Punctuation,
            TagSource::Untagged => TagOutcome::Untagged,
            _ => TagOutcome::Tagged,
        }
    }
}

/// Whether `tags` is the "no category" placeholder
pub fn is_placeholder_tag(tags: &str) -> bool {
    tags == PLACEHOLDER_TAG
}

/// Lemma without its `-`/`_` suffix markers
pub fn strip_lemma(lemma: &str) -> &str {
    let head = lemma.split('-').next().unwrap_or(lemma);
    head.split('_').next().unwrap_or(head).trim()
}

/// Find tags for a token without touching it
pub fn lookup<'a>(token: &Token, lexicon: &'a Lexicon) -> (TagSource, &'a str) {
    let hit = |key: &str| lexicon.get(key).filter(|tags| !is_placeholder_tag(tags));

    if let Some(tags) = hit(&token.lemma) {
        (TagSource::Lemma, tags)
    } else if let Some(tags) = hit(strip_lemma(&token.lemma)) {
        (TagSource::StrippedLemma, tags)
    } else if let Some(tags) = hit(&token.form) {
        (TagSource::SurfaceForm, tags)
    } else if token.pos == POS_DIGIT || is_digits(&token.form) {
        (TagSource::Numeral, NUMERAL_TAGS)
    } else if token.pos == POS_PUNCTUATION {
        (TagSource::Punctuation, PUNCTUATION_TAG)
    } else {
        (TagSource::Untagged, PLACEHOLDER_TAG)
    }
}

/// Populate a token's semantic tags and count it
pub fn resolve(token: &mut Token, lexicon: &Lexicon, metrics: &mut MetricsCollector) -> TagSource {
    let (source, tags) = lookup(token, lexicon);
    token.semantic_tags = tags.to_string();
    metrics.record_token(&token.form, source.outcome());
    source
}
