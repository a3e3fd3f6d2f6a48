//! File reading utilities

use crate::error::{CliError, CliResult};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn markup_regex() -> &'static Regex {
    static MARKUP: OnceLock<Regex> = OnceLock::new();
    // Tags never span lines
    MARKUP.get_or_init(|| Regex::new(r"<.*?>").expect("valid markup pattern"))
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> CliResult<String> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CliError::FileNotFound(path.display().to_string()).into(),
            _ => CliError::FileUnreadable(format!("{}: {e}", path.display())).into(),
        })
    }

    /// Read an input document ready for annotation
    ///
    /// Byte order marks are removed everywhere, and files with an `.xml`
    /// extension have their markup tags stripped.
    pub fn read_input(path: &Path) -> CliResult<String> {
        let text = Self::read_text(path)?.replace(BYTE_ORDER_MARK, "");
        if Self::is_xml(path) {
            log::debug!("Stripping markup from {}", path.display());
            Ok(strip_markup(&text))
        } else {
            Ok(text)
        }
    }

    /// Fail unless `path` names an existing file
    pub fn require_file(path: &Path) -> CliResult<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::FileNotFound(path.display().to_string()).into())
        }
    }

    /// Whether the file has an `.xml` extension (any case)
    pub fn is_xml(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
    }
}

/// Remove `<...>` tags
pub fn strip_markup(text: &str) -> String {
    markup_regex().replace_all(text, "").into_owned()
}
