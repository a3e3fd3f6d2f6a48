//! Validate command implementation

use crate::input::FileReader;
use crate::error::CliResult;
use arasas_core::segmentation::SplitRules;
use arasas_core::Lexicon;
use clap::{ArgGroup, Args};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).multiple(true)))]
pub struct ValidateArgs {
    /// Lexicon file to validate
    #[arg(short, long, value_name = "FILE", group = "target")]
    pub lexicon: Option<PathBuf>,

    /// Segmentation rules file to validate
    #[arg(short, long, value_name = "FILE", group = "target")]
    pub rules: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        if let Some(path) = &self.lexicon {
            validate_lexicon(path)?;
        }
        if let Some(path) = &self.rules {
            validate_rules(path)?;
        }
        Ok(())
    }
}

fn validate_lexicon(path: &Path) -> CliResult<()> {
    println!("Validating lexicon: {}", path.display());

    let content = FileReader::read_text(path)?;
    match Lexicon::parse(&content) {
        Ok(lexicon) => {
            println!("✓ Lexicon is valid!");
            println!("  Entries: {}", lexicon.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Lexicon is invalid!");
            println!("  Error: {e}");
            Err(anyhow::anyhow!("Validation failed: {}", e))
        }
    }
}

fn validate_rules(path: &Path) -> CliResult<()> {
    println!("Validating segmentation rules: {}", path.display());

    let content = FileReader::read_text(path)?;
    match SplitRules::from_toml_str(&content) {
        Ok(rules) => {
            println!("✓ Rules are valid!");
            println!("  Language code: {}", rules.language_code());
            Ok(())
        }
        Err(e) => {
            println!("✗ Rules are invalid!");
            println!("  Error: {e}");
            Err(anyhow::anyhow!("Validation failed: {}", e))
        }
    }
}
