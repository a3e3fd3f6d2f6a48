//! Rule-based sentence splitter with lazily loaded rules

use super::rules::SplitRules;
use super::SentenceSplitter;
use crate::error::{AnnotateError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

const RESOURCE_NAME: &str = "segmentation-rules";

/// Where splitting rules come from
#[derive(Debug, Clone)]
pub enum RuleSource {
    /// Rules compiled into the crate
    Embedded,
    /// External TOML rules file
    File(PathBuf),
}

impl RuleSource {
    fn load(&self) -> Result<SplitRules> {
        match self {
            RuleSource::Embedded => SplitRules::embedded(),
            RuleSource::File(path) => {
                if !path.is_file() {
                    return Err(AnnotateError::resource_missing(RESOURCE_NAME, path));
                }
                let content =
                    fs::read_to_string(path).map_err(|e| AnnotateError::file_access(path, e))?;
                SplitRules::from_toml_str(&content)
            }
        }
    }

    fn location(&self) -> PathBuf {
        match self {
            RuleSource::Embedded => PathBuf::from("<embedded>"),
            RuleSource::File(path) => path.clone(),
        }
    }
}

/// Splitter driven by [`SplitRules`]
///
/// Rules are not read until [`SentenceSplitter::ensure_ready`] runs; splitting
/// before that reports the rules as a missing resource.
#[derive(Debug)]
pub struct RuleSplitter {
    source: RuleSource,
    rules: OnceLock<SplitRules>,
}

impl RuleSplitter {
    /// Splitter using the bundled Arabic rules
    pub fn embedded() -> Self {
        Self::new(RuleSource::Embedded)
    }

    /// Splitter reading rules from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(RuleSource::File(path.into()))
    }

    /// Splitter for the given source
    pub fn new(source: RuleSource) -> Self {
        Self {
            source,
            rules: OnceLock::new(),
        }
    }

    /// Splitter with rules already compiled
    pub fn with_rules(rules: SplitRules) -> Self {
        let splitter = Self::embedded();
        let _ = splitter.rules.set(rules);
        splitter
    }
}

impl SentenceSplitter for RuleSplitter {
    fn split(&self, line: &str) -> Result<Vec<String>> {
        let rules = self
            .rules
            .get()
            .ok_or_else(|| AnnotateError::resource_missing(RESOURCE_NAME, self.source.location()))?;
        Ok(rules.split(line))
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.rules.get().is_some() {
            return Ok(());
        }
        let rules = self.source.load()?;
        log::info!(
            "Loaded segmentation rules '{}' from {}",
            rules.language_code(),
            self.source.location().display()
        );
        // A concurrent caller may have won the race; both loaded the same rules.
        let _ = self.rules.set(rules);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}
