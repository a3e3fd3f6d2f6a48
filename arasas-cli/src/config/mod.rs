//! Configuration module
//!
//! Settings come from the optional `--config` file and are then overridden
//! by command-line flags (and `ARASAS_DATA_DIR`, through clap).

use crate::error::{CliError, CliResult};
use arasas_core::{AnnotatorConfig, OutputFormat};
use std::path::{Path, PathBuf};

/// Read the configuration file, or fall back to defaults
pub fn load(path: Option<&Path>) -> CliResult<AnnotatorConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let config = AnnotatorConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
            log::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(AnnotatorConfig::default()),
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Data directory for the morphology database
    pub data_dir: Option<PathBuf>,
    /// Lexicon file
    pub lexicon: Option<PathBuf>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Keep every tag in XML output; only ever switches the setting on
    pub xml_full_tags: bool,
}

impl Overrides {
    /// Apply the command-line values on top of `config`
    pub fn apply(&self, config: &mut AnnotatorConfig) {
        if let Some(dir) = &self.data_dir {
            config.resources.data_dir = dir.clone();
        }
        if let Some(lexicon) = &self.lexicon {
            config.resources.lexicon = lexicon.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.xml_full_tags {
            config.output.xml_full_tags = true;
        }
    }
}

/// Template written by `generate-config`
pub fn template() -> String {
    let defaults = AnnotatorConfig::default();
    format!(
        r#"# Arasas configuration

[resources]
# Directory holding the morphology database and other fetched data
data_dir = "{data_dir}"

# Morphology database (form, pos, lemma, gloss, score), relative to data_dir
morphology_db = "{morphology_db}"

# Lemma-to-tag lexicon
lexicon = "{lexicon}"

# Command run once when a resource is missing; it receives
# ARASAS_RESOURCE and ARASAS_RESOURCE_PATH in its environment
# fetch_command = "arasas-fetch-data"

# Custom sentence splitting rules (the bundled Arabic rules otherwise)
# segmentation_rules = "rules/arabic.toml"

[output]
# vertical, horizontal or xml
format = "{format}"

# Keep every tag code in XML sem attributes
xml_full_tags = {xml_full_tags}
"#,
        data_dir = defaults.resources.data_dir.display(),
        morphology_db = defaults.resources.morphology_db.display(),
        lexicon = defaults.resources.lexicon.display(),
        format = defaults.output.format,
        xml_full_tags = defaults.output.xml_full_tags,
    )
}
