//! Annotate command implementation

use crate::config::{self, Overrides};
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::ResultWriter;
use crate::progress::ProgressReporter;
use arasas_core::{AnnotateOptions, Annotator, AnnotatorConfig, Lexicon};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input text file (markup is stripped from .xml files)
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Lemma-to-tag lexicon file
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Include the metrics log as JSON
    #[arg(long)]
    pub log: bool,

    /// Keep every tag code in XML output
    #[arg(long)]
    pub xml_full_tags: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the morphology database
    #[arg(long, value_name = "DIR", env = "ARASAS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `pos, form, tags` line per token
    Vertical,
    /// `form_TAG` tokens on a single line
    Horizontal,
    /// One `<w>` element per token
    Xml,
}

impl From<OutputFormat> for arasas_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Vertical => arasas_core::OutputFormat::Vertical,
            OutputFormat::Horizontal => arasas_core::OutputFormat::Horizontal,
            OutputFormat::Xml => arasas_core::OutputFormat::Xml,
        }
    }
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting annotation");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let lexicon_path = &config.resources.lexicon;

        // Input and lexicon are read before resources are fetched
        let text = FileReader::read_input(&self.input)?;
        FileReader::require_file(lexicon_path)?;
        let start = Instant::now();
        let lexicon = Lexicon::from_file(lexicon_path)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        let lexicon_load = start.elapsed();
        log::info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            lexicon_path.display()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start("Loading resources");

        let annotator = Annotator::from_config(&config).map_err(|e| {
            progress.finish();
            CliError::ProcessingError(e.to_string())
        })?;

        progress.stage(&format!("Annotating {}", self.input.display()));
        let options = AnnotateOptions::from(&config.output);
        let result = annotator
            .annotate_with_load_time(&text, &lexicon, lexicon_load, &options)
            .map_err(|e| {
                progress.finish();
                CliError::ProcessingError(e.to_string())
            })?;
        progress.finish();

        log::info!(
            "Annotated {} sentences, {} tokens ({} untagged)",
            result.metrics.sentences,
            result.metrics.tokens,
            result.metrics.tokens_untagged
        );

        match &self.output_file {
            Some(path) => ResultWriter::create(path, self.log)?.write(&result)?,
            None => ResultWriter::stdout(self.log).write(&result)?,
        }

        Ok(())
    }

    /// Merge the configuration file with command-line flags
    pub fn resolve_config(&self) -> CliResult<AnnotatorConfig> {
        let mut config = config::load(self.config.as_deref())?;
        Overrides {
            data_dir: self.data_dir.clone(),
            lexicon: self.lexicon.clone(),
            format: self.output_format.map(Into::into),
            xml_full_tags: self.xml_full_tags,
        }
        .apply(&mut config);
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
