//! Annotator configuration
//!
//! Loaded from TOML; every section and field is optional.
//!
//! ```toml
//! [resources]
//! data_dir = "data"
//! morphology_db = "morphology.tsv"
//! lexicon = "arasas_lexicon.usas"
//! fetch_command = "arasas-fetch-data"
//!
//! [output]
//! format = "xml"
//! xml_full_tags = true
//! ```

use crate::error::{AnnotateError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory holding downloadable resources
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default morphology database file name inside the data directory
pub const DEFAULT_MORPHOLOGY_DB: &str = "morphology.tsv";
/// Default lexicon path
pub const DEFAULT_LEXICON: &str = "arasas_lexicon.usas";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AnnotatorConfig {
    /// Resource locations
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resource-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory for the morphology database and other fetched data
    pub data_dir: PathBuf,

    /// Morphology database, relative to `data_dir` unless absolute
    pub morphology_db: PathBuf,

    /// Lexicon file
    pub lexicon: PathBuf,

    /// Shell command run once when a resource is missing
    pub fetch_command: Option<String>,

    /// Segmentation rules file; the bundled Arabic rules otherwise
    pub segmentation_rules: Option<PathBuf>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            morphology_db: PathBuf::from(DEFAULT_MORPHOLOGY_DB),
            lexicon: PathBuf::from(DEFAULT_LEXICON),
            fetch_command: None,
            segmentation_rules: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Keep every tag code in XML `sem` attributes
    pub xml_full_tags: bool,
}

impl AnnotatorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| AnnotateError::Config(e.to_string()))
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| AnnotateError::file_access(path, e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AnnotateError::Config(format!("{}: {e}", path.display())))
    }
}
