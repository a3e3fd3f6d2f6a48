//! Semantic tagging for Arabic text
//!
//! Raw text is split into sentences, tokenized, morphologically
//! disambiguated and then tagged with USAS-style semantic category codes from
//! a lemma lexicon. The tagged text is rendered in one of three formats and
//! returned together with coverage and timing metrics.
//!
//! # Architecture
//!
//! - **Segmentation**: line filtering plus a rule-based [`SentenceSplitter`]
//! - **Morphology**: word tokenizer and a [`Disambiguator`] over a morphology database
//! - **Resolution**: tiered lexicon lookup in [`resolver`]
//! - **Output**: vertical, horizontal and XML [`OutputFormatter`]s
//!
//! The sentence splitter and disambiguator are traits, so other
//! implementations can be injected through [`AnnotatorBuilder`].
//!
//! # Example
//!
//! ```rust
//! use arasas_core::{AnnotateOptions, Annotator, Lexicon, MleDisambiguator, MorphologyDb};
//! use std::sync::Arc;
//!
//! let db = MorphologyDb::parse("كتاب\tnoun\tكِتاب_1\tbook\t1\n").unwrap();
//! let annotator = Annotator::builder()
//!     .disambiguator(Arc::new(MleDisambiguator::new(Arc::new(db))))
//!     .build()
//!     .unwrap();
//! let lexicon = Lexicon::parse("كِتاب\tQ4.1\t_1\n").unwrap();
//!
//! let result = annotator
//!     .annotate("كتاب.", &lexicon, &AnnotateOptions::default())
//!     .unwrap();
//! assert_eq!(result.formatted, "noun\tكتاب\tQ4.1\npunc\t.\tPUNC");
//! ```

pub mod adapter;
pub mod annotator;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod morphology;
pub mod output;
pub mod resolver;
pub mod resources;
pub mod segmentation;
pub mod service;
pub mod tokenizer;
pub mod types;

pub use annotator::{annotate, AnnotateOptions, Annotator, AnnotatorBuilder};
pub use config::AnnotatorConfig;
pub use error::{AnnotateError, Result};
pub use lexicon::Lexicon;
pub use metrics::{Metrics, Timings};
pub use morphology::{Analysis, Disambiguator, MleDisambiguator, MorphologyDb};
pub use output::{OutputFormat, OutputFormatter};
pub use resources::{CommandFetcher, ResourceFetcher, ResourceStore};
pub use segmentation::{RuleSplitter, SentenceSplitter};
pub use service::{truncate_words, AnnotationService, WORDS_LIMIT};
pub use types::{AnnotationResult, Sentence, Token};
