//! Export functionality
//!
//! Provides exporters for the detail table and the report model:
//! - CSV (UTF-8 with BOM)
//! - XLSX (feature `xlsx-export`)
//! - JSON

pub mod csv;
pub mod json;
#[cfg(feature = "xlsx-export")]
pub mod xlsx;

use chrono::Utc;

/// Result of an export operation
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Exported content (as string - binary formats are base64 encoded)
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::IoError(e.to_string())
    }
}

/// Timestamped default output file name
pub fn default_filename(extension: &str) -> String {
    format!(
        "CMM_Detailed_Data_{}.{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

// Re-export for convenience
pub use csv::CsvExporter;
pub use json::JsonExporter;
#[cfg(feature = "xlsx-export")]
pub use xlsx::XlsxExporter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filename_shape() {
        let name = default_filename("csv");
        assert!(name.starts_with("CMM_Detailed_Data_"));
        assert!(name.ends_with(".csv"));
        // CMM_Detailed_Data_ + YYYYMMDD_HHMMSS + .csv
        assert_eq!(name.len(), "CMM_Detailed_Data_".len() + 15 + 4);
    }
}
