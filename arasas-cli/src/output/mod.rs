//! Result writing
//!
//! The metrics log goes after the text on standard output but before it in
//! an output file.

use crate::error::CliResult;
use anyhow::Context;
use arasas_core::service::metrics_json;
use arasas_core::AnnotationResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Where the document is written, which decides the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Text, then the log, then a final newline
    Stream,
    /// Log first, then the text
    File,
}

/// Writes annotation results with an optional JSON metrics log
pub struct ResultWriter<W: Write> {
    writer: W,
    layout: Layout,
    include_log: bool,
}

impl<W: Write> ResultWriter<W> {
    /// Create a new result writer
    pub fn new(writer: W, layout: Layout, include_log: bool) -> Self {
        Self {
            writer,
            layout,
            include_log,
        }
    }

    /// Write one result and flush
    pub fn write(&mut self, result: &AnnotationResult) -> CliResult<()> {
        let document = render(result, self.layout, self.include_log)?;
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ResultWriter<io::Stdout> {
    /// Create a writer for standard output
    pub fn stdout(include_log: bool) -> Self {
        Self::new(io::stdout(), Layout::Stream, include_log)
    }
}

impl ResultWriter<BufWriter<File>> {
    /// Create (or truncate) an output file
    pub fn create(path: &Path, include_log: bool) -> CliResult<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file), Layout::File, include_log))
    }
}

/// Assemble the document text for a layout
pub fn render(result: &AnnotationResult, layout: Layout, include_log: bool) -> CliResult<String> {
    let log = if include_log {
        Some(metrics_json(&result.metrics)?)
    } else {
        None
    };

    let document = match (layout, log) {
        (Layout::Stream, Some(log)) => format!("{}\n\n{log}\n", result.formatted),
        (Layout::Stream, None) => format!("{}\n", result.formatted),
        (Layout::File, Some(log)) => format!("{log}\n\n{}", result.formatted),
        (Layout::File, None) => result.formatted.clone(),
    };
    Ok(document)
}
