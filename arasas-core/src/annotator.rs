//! The annotation pipeline
//!
//! segmentation -> tokenization -> disambiguation -> tag resolution ->
//! formatting, with every stage reporting into one [`MetricsCollector`].
//! Sentences are processed strictly in input order.

use crate::adapter::MorphologicalAdapter;
use crate::config::{AnnotatorConfig, OutputConfig};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::metrics::{MetricsCollector, Stage};
use crate::morphology::{Disambiguator, MleDisambiguator, MorphologyDb};
use crate::output::OutputFormat;
use crate::resolver;
use crate::resources::{CommandFetcher, NoFetcher, Resource, ResourceFetcher, ResourceStore};
use crate::segmentation::{RuleSplitter, Segmenter, SentenceSplitter};
use crate::types::{AnnotationResult, Sentence};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-call output options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Output format
    pub format: OutputFormat,
    /// Keep every tag code in XML output
    pub xml_full_tags: bool,
}

impl AnnotateOptions {
    /// Options for a format with first-tag-only XML
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            xml_full_tags: false,
        }
    }

    /// Set the full-tags flag
    pub fn xml_full_tags(mut self, full: bool) -> Self {
        self.xml_full_tags = full;
        self
    }
}

impl From<&OutputConfig> for AnnotateOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            xml_full_tags: config.xml_full_tags,
        }
    }
}

/// Initialized pipeline, shareable across threads
///
/// Holds only read-only state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Annotator {
    segmenter: Segmenter,
    adapter: MorphologicalAdapter,
    initialization: Duration,
}

impl Annotator {
    /// Start configuring an annotator
    pub fn builder() -> AnnotatorBuilder {
        AnnotatorBuilder::default()
    }

    /// Build an annotator from configuration
    pub fn from_config(config: &AnnotatorConfig) -> Result<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// Time spent initializing this annotator
    pub fn initialization_time(&self) -> Duration {
        self.initialization
    }

    /// Annotate `text` against an already loaded lexicon
    pub fn annotate(
        &self,
        text: &str,
        lexicon: &Lexicon,
        options: &AnnotateOptions,
    ) -> Result<AnnotationResult> {
        self.annotate_with_load_time(text, lexicon, Duration::ZERO, options)
    }

    /// Load the lexicon at `lexicon_path`, then annotate `text`
    pub fn annotate_with_lexicon_path(
        &self,
        text: &str,
        lexicon_path: &Path,
        options: &AnnotateOptions,
    ) -> Result<AnnotationResult> {
        let start = Instant::now();
        let lexicon = Lexicon::from_file(lexicon_path)?;
        let lexicon_load = start.elapsed();
        log::debug!(
            "Loaded lexicon {} ({} entries) in {:?}",
            lexicon_path.display(),
            lexicon.len(),
            lexicon_load
        );

        self.annotate_with_load_time(text, &lexicon, lexicon_load, options)
    }

    /// Annotate against a lexicon the caller loaded in `lexicon_load`
    pub fn annotate_with_load_time(
        &self,
        text: &str,
        lexicon: &Lexicon,
        lexicon_load: Duration,
        options: &AnnotateOptions,
    ) -> Result<AnnotationResult> {
        let mut metrics = MetricsCollector::new();
        metrics.add_duration(Stage::Initialization, self.initialization);
        metrics.add_duration(Stage::LexiconLoad, lexicon_load);

        let raw_sentences = metrics.time(Stage::Segmentation, || self.segmenter.segment(text))?;
        metrics.set_sentences(raw_sentences.len());
        log::debug!("Segmented {} sentences", raw_sentences.len());

        let mut formatter = options.format.formatter(options.xml_full_tags);
        let mut sentences = Vec::with_capacity(raw_sentences.len());

        for (idx, raw) in raw_sentences.iter().enumerate() {
            let words = metrics.time(Stage::Tokenization, || self.adapter.tokenize(raw));
            let mut tokens = metrics.time(Stage::Disambiguation, || self.adapter.analyze(&words))?;

            let start = Instant::now();
            for token in &mut tokens {
                resolver::resolve(token, lexicon, &mut metrics);
            }
            let sentence = Sentence::new(idx + 1, tokens);
            formatter.format_sentence(&sentence);
            metrics.add_duration(Stage::Tagging, start.elapsed());

            sentences.push(sentence);
        }

        let metrics = metrics.finish();
        log::debug!(
            "Tagged {} tokens, coverage {:?}",
            metrics.tokens,
            metrics.token_coverage
        );

        Ok(AnnotationResult {
            formatted: formatter.finish(),
            metrics,
            sentences,
        })
    }
}

/// Builder for [`Annotator`]
///
/// Collaborators that are not injected are created from the configuration.
#[derive(Default)]
pub struct AnnotatorBuilder {
    config: AnnotatorConfig,
    splitter: Option<Arc<dyn SentenceSplitter>>,
    disambiguator: Option<Arc<dyn Disambiguator>>,
    fetcher: Option<Box<dyn ResourceFetcher>>,
}

impl AnnotatorBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration
    pub fn config(mut self, config: AnnotatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a sentence splitter
    pub fn splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Inject a ready disambiguator
    pub fn disambiguator(mut self, disambiguator: Arc<dyn Disambiguator>) -> Self {
        self.disambiguator = Some(disambiguator);
        self
    }

    /// Use a custom fetcher for missing resources
    pub fn fetcher(mut self, fetcher: Box<dyn ResourceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Perform the one-time initialization and build the annotator
    pub fn build(self) -> Result<Annotator> {
        let start = Instant::now();
        let resources = &self.config.resources;

        let fetcher = match (self.fetcher, &resources.fetch_command) {
            (Some(fetcher), _) => fetcher,
            (None, Some(command)) => Box::new(CommandFetcher::new(command.clone())),
            (None, None) => Box::new(NoFetcher),
        };
        let store = ResourceStore::with_fetcher(&resources.data_dir, fetcher);

        let splitter: Arc<dyn SentenceSplitter> = match self.splitter {
            Some(splitter) => splitter,
            None => match &resources.segmentation_rules {
                Some(path) => {
                    let path = store.ensure_ready(&Resource::new("segmentation-rules", path))?;
                    Arc::new(RuleSplitter::from_file(path))
                }
                None => Arc::new(RuleSplitter::embedded()),
            },
        };
        splitter.ensure_ready()?;

        let disambiguator: Arc<dyn Disambiguator> = match self.disambiguator {
            Some(disambiguator) => disambiguator,
            None => {
                let path = store.ensure_ready(&Resource::new(
                    "morphology-db",
                    &resources.morphology_db,
                ))?;
                let db = MorphologyDb::from_file(&path)?;
                log::info!(
                    "Loaded morphology database {} ({} forms)",
                    path.display(),
                    db.len()
                );
                Arc::new(MleDisambiguator::new(Arc::new(db)))
            }
        };

        let initialization = start.elapsed();
        log::info!(
            "Annotator ready (splitter: {}, disambiguator: {}) in {:?}",
            splitter.name(),
            disambiguator.name(),
            initialization
        );

        Ok(Annotator {
            segmenter: Segmenter::new(splitter),
            adapter: MorphologicalAdapter::new(disambiguator),
            initialization,
        })
    }
}

/// One-shot annotation with default resources
///
/// Builds an annotator from [`AnnotatorConfig::default`], loads the lexicon
/// and annotates. `output_format` of `None` means vertical. Long-running
/// hosts should build one [`Annotator`] and reuse it instead.
pub fn annotate(
    text: &str,
    output_format: Option<&str>,
    lexicon_path: &Path,
    xml_full_tags: bool,
) -> Result<AnnotationResult> {
    let options = AnnotateOptions {
        format: OutputFormat::from_option(output_format)?,
        xml_full_tags,
    };
    let annotator = Annotator::from_config(&AnnotatorConfig::default())?;
    annotator.annotate_with_lexicon_path(text, lexicon_path, &options)
}
