//! PDF report import
//!
//! Extracts the text layer of a measurement report PDF and feeds it to the
//! report parser. Scanned (image-only) PDFs yield no text and are rejected
//! as empty documents.

use std::path::Path;

use tracing::debug;

use super::parser::{ParserOptions, ReportParser};
use super::{ImportError, ImportResult};

/// PDF importer - extracts text and parses it as a measurement report
#[derive(Debug, Clone, Default)]
pub struct PdfImporter {
    options: ParserOptions,
}

impl PdfImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Import a report from in-memory PDF bytes
    pub fn import_bytes(&self, bytes: &[u8]) -> Result<ImportResult, ImportError> {
        let text =
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ImportError::Pdf(e.to_string()))?;
        debug!(chars = text.len(), "extracted PDF text");

        if text.trim().is_empty() {
            return Err(ImportError::EmptyDocument);
        }

        Ok(ReportParser::with_options(self.options.clone()).parse(&text))
    }

    /// Import a report from a PDF file, recording the file name as the
    /// report source
    pub fn import_path(&self, path: &Path) -> Result<ImportResult, ImportError> {
        let bytes = std::fs::read(path)?;
        let mut result = self.import_bytes(&bytes)?;
        result.report.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(result)
    }
}
