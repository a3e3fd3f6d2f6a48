//! Output formatting module

use crate::error::AnnotateError;
use crate::types::Sentence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod horizontal;
pub mod vertical;
pub mod xml;

pub use horizontal::HorizontalFormatter;
pub use vertical::VerticalFormatter;
pub use xml::XmlFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render one resolved sentence
    fn format_sentence(&mut self, sentence: &Sentence);

    /// Produce the final text
    fn finish(&mut self) -> String;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `pos \t form \t tags` line per token, blank line between sentences
    #[default]
    Vertical,
    /// `form_TAG` tokens on one line
    Horizontal,
    /// One `<w>` element per token
    Xml,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Vertical,
        OutputFormat::Horizontal,
        OutputFormat::Xml,
    ];

    /// Name used on the command line and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Vertical => "vertical",
            OutputFormat::Horizontal => "horizontal",
            OutputFormat::Xml => "xml",
        }
    }

    /// Parse an optional format name; absent or blank means vertical
    pub fn from_option(name: Option<&str>) -> Result<Self, AnnotateError> {
        match name.map(str::trim) {
            None | Some("") => Ok(OutputFormat::Vertical),
            Some(name) => name.parse(),
        }
    }

    /// Create the formatter for this format
    pub fn formatter(&self, xml_full_tags: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Vertical => Box::new(VerticalFormatter::new()),
            OutputFormat::Horizontal => Box::new(HorizontalFormatter::new()),
            OutputFormat::Xml => Box::new(XmlFormatter::new(xml_full_tags)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AnnotateError::UnknownFormat(s.to_string()))
    }
}

/// Render sentences in one go
pub fn render(sentences: &[Sentence], format: OutputFormat, xml_full_tags: bool) -> String {
    let mut formatter = format.formatter(xml_full_tags);
    for sentence in sentences {
        formatter.format_sentence(sentence);
    }
    formatter.finish()
}

/// Join per-line pieces, collapse doubled newlines and trim
///
/// Sentence ends are pushed as `"\n"` pieces, which leaves exactly one
/// blank line between sentences after collapsing.
pub(crate) fn join_lines(pieces: &[String]) -> String {
    pieces
        .join("\n")
        .replace("\n\n", "\n")
        .trim()
        .to_string()
}
