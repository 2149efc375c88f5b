//! Text report import
//!
//! Handles raw text dumps of measurement reports. Machine exports are not
//! reliably UTF-8 (Japanese reports are commonly Shift_JIS), so bytes are
//! decoded via a UTF-8 fast path with charset detection as fallback, or an
//! explicitly forced encoding.

use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, warn};

use super::parser::{ParserOptions, ReportParser};
use super::{ImportError, ImportResult};

/// Text importer - decodes raw bytes and parses them as a measurement report
#[derive(Debug, Clone, Default)]
pub struct TextImporter {
    options: ParserOptions,
    forced_encoding: Option<String>,
}

impl TextImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            forced_encoding: None,
        }
    }

    /// Force a specific encoding label (e.g. `shift_jis`) instead of
    /// detecting one
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.forced_encoding = Some(label.into());
        self
    }

    /// Import a report from already-decoded text
    pub fn import_str(&self, text: &str) -> Result<ImportResult, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::EmptyDocument);
        }
        Ok(ReportParser::with_options(self.options.clone()).parse(text))
    }

    /// Import a report from raw bytes
    pub fn import_bytes(&self, bytes: &[u8]) -> Result<ImportResult, ImportError> {
        let text = decode_bytes(bytes, self.forced_encoding.as_deref())?;
        self.import_str(&text)
    }

    /// Import a report from a text file, recording the file name as the
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

/// Decode report bytes into text
///
/// With a forced label the named encoding is used and decode errors are
/// fatal. Otherwise valid UTF-8 is passed through and anything else goes
/// through charset detection; detection-path decode errors degrade to
/// replacement characters with a warning, since a partially mojibake report
/// often still carries usable numeric lines.
pub fn decode_bytes(bytes: &[u8], forced_label: Option<&str>) -> Result<String, ImportError> {
    if let Some(label) = forced_label {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ImportError::Decode(format!("unknown encoding label: {}", label)))?;
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(ImportError::Decode(format!(
                "input is not valid {}",
                encoding.name()
            )));
        }
        return Ok(text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    debug!(encoding = encoding.name(), "detected report encoding");

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "decode errors; replacement characters substituted"
        );
    }
    Ok(text.into_owned())
}
