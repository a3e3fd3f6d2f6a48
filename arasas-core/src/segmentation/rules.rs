//! Sentence splitting rules
//!
//! Rules are described in TOML and compiled into lookup tables once.

use crate::error::{AnnotateError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Rules bundled with the crate
pub(crate) const EMBEDDED_RULES: &str = include_str!("../../configs/arabic.toml");

/// Root rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub closers: Closers,
    #[serde(default)]
    pub initials: Initials,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Closers {
    #[serde(default)]
    pub chars: Vec<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Initials {
    #[serde(default)]
    pub enabled: bool,
}

/// Abbreviations grouped by arbitrary category names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Compiled splitting rules
#[derive(Debug, Clone)]
pub struct SplitRules {
    code: String,
    terminators: CharTable,
    closers: CharTable,
    initials: bool,
    abbreviations: HashSet<String>,
}

/// Character set with an ASCII fast path
#[derive(Debug, Clone)]
struct CharTable {
    ascii: [bool; 128],
    other: HashSet<char>,
}

impl CharTable {
    fn new(chars: &[char]) -> Self {
        let mut ascii = [false; 128];
        let mut other = HashSet::new();
        for &ch in chars {
            if ch.is_ascii() {
                ascii[ch as usize] = true;
            } else {
                other.insert(ch);
            }
        }
        Self { ascii, other }
    }

    #[inline]
    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.other.contains(&ch)
        }
    }
}

impl SplitRules {
    /// Parse rules from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RulesConfig =
            toml::from_str(toml_str).map_err(|e| AnnotateError::MalformedRules(e.to_string()))?;
        Self::from_config(&config)
    }

    /// The rules shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_RULES)
    }

    /// Compile a parsed configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        if config.terminators.chars.is_empty() {
            return Err(AnnotateError::MalformedRules(
                "at least one terminator character is required".to_string(),
            ));
        }

        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|abbr| abbr.trim_end_matches('.').to_lowercase())
            .filter(|abbr| !abbr.is_empty())
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            terminators: CharTable::new(&config.terminators.chars),
            closers: CharTable::new(&config.closers.chars),
            initials: config.initials.enabled,
            abbreviations,
        })
    }

    /// Language code of these rules
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Split one line into trimmed, non-empty sentences
    pub fn split(&self, line: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !self.terminators.contains(ch) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && self.terminators.contains(chars[i].1) {
                i += 1;
            }
            let single_dot = i - run_start == 1 && ch == '.';
            while i < chars.len() && self.closers.contains(chars[i].1) {
                i += 1;
            }

            let at_break = i == chars.len() || chars[i].1.is_whitespace();
            if !at_break || (single_dot && self.is_non_final_dot(&line[start..pos])) {
                continue;
            }

            let end = chars.get(i).map_or(line.len(), |&(p, _)| p);
            push_trimmed(&mut sentences, &line[start..end]);
            start = end;
        }

        push_trimmed(&mut sentences, &line[start..]);
        sentences
    }

    /// Whether a "." closing `before` belongs to an abbreviation or initial
    fn is_non_final_dot(&self, before: &str) -> bool {
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        if self.initials {
            let mut letters = word.chars();
            if let (Some(first), None) = (letters.next(), letters.next()) {
                if first.is_ascii_uppercase() {
                    return true;
                }
            }
        }

        self.abbreviations.contains(&word.to_lowercase())
    }
}

fn push_trimmed(sentences: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        sentences.push(text.to_string());
    }
}
