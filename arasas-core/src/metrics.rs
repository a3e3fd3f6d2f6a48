//! Run metrics: counters, stage timings and coverage ratios

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Named pipeline stages that get timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// One-time model and resource setup
    Initialization,
    /// Lexicon read and parse
    LexiconLoad,
    /// Line and sentence splitting
    Segmentation,
    /// Word tokenization, summed over sentences
    Tokenization,
    /// Morphological disambiguation, summed over sentences
    Disambiguation,
    /// Semantic tag resolution, summed over sentences
    Tagging,
}

/// Elapsed wall-clock time per stage, serialized in seconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub initialization: Duration,
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub lexicon_load: Duration,
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub segmentation: Duration,
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub tokenization: Duration,
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub disambiguation: Duration,
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub tagging: Duration,
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

fn from_secs<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

/// Final metrics record of one annotate call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub tokens: usize,
    pub tokens_untagged: usize,
    pub tokens_punctuation: usize,
    /// Tokens tagged from the lexicon or by the numeral rule
    pub tokens_tagged: usize,
    pub sentences: usize,
    pub distinct_surface_forms: usize,
    #[serde(flatten)]
    pub timings: Timings,
    /// `1 - untagged / tokens`, `None` without tokens
    pub token_coverage: Option<f64>,
    /// `1 - untagged / (tokens - punctuation)`, `None` when only punctuation was seen
    pub token_coverage_without_punctuation: Option<f64>,
}

impl Metrics {
    /// Counters and ratios only, for comparing runs whose timings differ
    pub fn counters(&self) -> (usize, usize, usize, usize, usize, usize) {
        (
            self.tokens,
            self.tokens_untagged,
            self.tokens_punctuation,
            self.tokens_tagged,
            self.sentences,
            self.distinct_surface_forms,
        )
    }
}

/// How a token's semantic tags were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome {
    /// Found in the lexicon or assigned by the numeral rule
    Tagged,
    /// Punctuation sentinel
    Punctuation,
    /// Untagged sentinel
    Untagged,
}

/// Accumulates counts and timings while the pipeline runs
#[derive(Debug, Default)]
pub struct MetricsCollector {
    tokens: usize,
    tokens_untagged: usize,
    tokens_punctuation: usize,
    tokens_tagged: usize,
    sentences: usize,
    surface_forms: HashSet<String>,
    timings: Timings,
}

impl MetricsCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved token
    pub fn record_token(&mut self, form: &str, outcome: TagOutcome) {
        self.tokens += 1;
        if !self.surface_forms.contains(form) {
            self.surface_forms.insert(form.to_string());
        }
        match outcome {
            TagOutcome::Tagged => self.tokens_tagged += 1,
            TagOutcome::Punctuation => self.tokens_punctuation += 1,
            TagOutcome::Untagged => self.tokens_untagged += 1,
        }
    }

    /// Set the number of segmented sentences
    pub fn set_sentences(&mut self, count: usize) {
        self.sentences = count;
    }

    /// Add elapsed time to a stage
    pub fn add_duration(&mut self, stage: Stage, elapsed: Duration) {
        let slot = match stage {
            Stage::Initialization => &mut self.timings.initialization,
            Stage::LexiconLoad => &mut self.timings.lexicon_load,
            Stage::Segmentation => &mut self.timings.segmentation,
            Stage::Tokenization => &mut self.timings.tokenization,
            Stage::Disambiguation => &mut self.timings.disambiguation,
            Stage::Tagging => &mut self.timings.tagging,
        };
        *slot += elapsed;
    }

    /// Run `f`, charging its wall-clock time to `stage`
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.add_duration(stage, start.elapsed());
        value
    }

    /// Derive coverage ratios and produce the final record
    pub fn finish(self) -> Metrics {
        let token_coverage = coverage(self.tokens_untagged, self.tokens);
        let token_coverage_without_punctuation = coverage(
            self.tokens_untagged,
            self.tokens - self.tokens_punctuation,
        );

        Metrics {
            tokens: self.tokens,
            tokens_untagged: self.tokens_untagged,
            tokens_punctuation: self.tokens_punctuation,
            tokens_tagged: self.tokens_tagged,
            sentences: self.sentences,
            distinct_surface_forms: self.surface_forms.len(),
            timings: self.timings,
            token_coverage,
            token_coverage_without_punctuation,
        }
    }
}

fn coverage(untagged: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(1.0 - untagged as f64 / total as f64)
    }
}
