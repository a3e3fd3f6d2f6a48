//! Error types for the annotation pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the annotation pipeline and its collaborators
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// A model, database or rules file is not present
    #[error("required resource '{name}' is missing at {}", path.display())]
    ResourceMissing {
        /// Resource name
        name: String,
        /// Location where the resource was expected
        path: PathBuf,
    },

    /// The one-time fetch of a missing resource failed
    #[error("failed to fetch resource '{name}': {reason}")]
    FetchFailed {
        /// Resource name
        name: String,
        /// Why the fetch failed
        reason: String,
    },

    /// A file could not be opened or read
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        /// The offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A lexicon line has fewer than three tab-separated columns
    #[error("malformed lexicon line {line}: expected at least 3 tab-separated columns, found {columns}")]
    MalformedLexicon {
        /// 1-based line number
        line: usize,
        /// Number of columns found
        columns: usize,
    },

    /// A morphology database line cannot be parsed
    #[error("malformed morphology database line {line}: {reason}")]
    MalformedDatabase {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// Sentence segmentation rules cannot be parsed
    #[error("malformed segmentation rules: {0}")]
    MalformedRules(String),

    /// The disambiguator broke its contract or failed
    #[error("disambiguation failed: {0}")]
    Disambiguation(String),

    /// Output format name not recognised
    #[error("unknown output format '{0}' (expected vertical, horizontal or xml)")]
    UnknownFormat(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Metrics serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Serialized output is not valid UTF-8
    #[error("serialized output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl AnnotateError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn resource_missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ResourceMissing {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Whether this error can be cured by fetching a resource
    pub fn is_resource_missing(&self) -> bool {
        matches!(self, Self::ResourceMissing { .. })
    }
}

/// Result type for annotation operations
pub type Result<T> = std::result::Result<T, AnnotateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_lexicon_display() {
        let error = AnnotateError::MalformedLexicon {
            line: 7,
            columns: 2,
        };
        assert_eq!(
            error.to_string(),
            "malformed lexicon line 7: expected at least 3 tab-separated columns, found 2"
        );
    }

    #[test]
    fn test_resource_missing_display() {
        let error = AnnotateError::resource_missing("morphology-db", "/data/morphology.tsv");
        assert_eq!(
            error.to_string(),
            "required resource 'morphology-db' is missing at /data/morphology.tsv"
        );
        assert!(error.is_resource_missing());
    }

    #[test]
    fn test_file_access_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = AnnotateError::file_access("lexicon.usas", io);
        assert!(error.to_string().starts_with("cannot access lexicon.usas"));
        assert!(error.source().is_some());
        assert!(!error.is_resource_missing());
    }

    #[test]
    fn test_invalid_utf8_converts() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = AnnotateError::from(source);
        assert!(matches!(error, AnnotateError::Encoding(_)));
        assert!(error.to_string().starts_with("serialized output is not UTF-8"));
    }
}
