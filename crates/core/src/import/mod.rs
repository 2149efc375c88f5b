//! Import functionality
//!
//! Provides importers for measurement report input:
//! - PDF reports (text extraction via pdf-extract)
//! - Raw text dumps (charset detection for non-UTF-8 exports)
//!
//! Both importers feed the shared line parser in [`parser`].

pub mod parser;
pub mod patterns;
#[cfg(feature = "pdf-import")]
pub mod pdf;
pub mod text;

use serde::Serialize;

use crate::models::MeasurementReport;

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// The parsed report
    pub report: MeasurementReport,
    /// Parse statistics
    pub stats: ParseStats,
    /// Non-fatal problems encountered while parsing
    pub warnings: Vec<ParseWarning>,
}

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Document contains no text")]
    EmptyDocument,
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e.to_string())
    }
}

/// Statistics from a parse run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Non-blank lines scanned
    pub lines_scanned: usize,
    /// Lines matched by one of the report patterns
    pub lines_matched: usize,
    /// Elements extracted
    pub elements: usize,
    /// Coordinate readings extracted
    pub coordinate_readings: usize,
}

/// Non-fatal parse problem, tied to a 1-based line number
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

// Re-export for convenience
pub use parser::{ParserOptions, ReportParser};
#[cfg(feature = "pdf-import")]
pub use pdf::PdfImporter;
pub use text::TextImporter;
