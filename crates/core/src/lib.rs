//! CMM Report Core - library for CMM measurement report processing
//!
//! Provides unified interfaces for:
//! - Importing measurement reports (PDF text extraction, raw text with
//!   charset detection)
//! - Parsing report lines into a structured measurement model
//! - Flattening the model into a detail table with tolerance evaluation
//! - Export functionality (CSV, XLSX, JSON)
//! - Tolerance validation

pub mod export;
pub mod import;
pub mod models;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use import::{ImportError, ImportResult, ParseStats, ParseWarning, ParserOptions, ReportParser, TextImporter};
#[cfg(feature = "pdf-import")]
pub use import::PdfImporter;

pub use export::{CsvExporter, ExportError, ExportResult, JsonExporter};
#[cfg(feature = "xlsx-export")]
pub use export::XlsxExporter;

pub use validation::{ToleranceReport, ToleranceValidator, ToleranceViolation};

// Re-export models
pub use models::enums::*;
pub use models::{
    CoordinateReading, CoordinateSystem, DiameterReading, FormStatistics, MeasurementElement,
    MeasurementReport,
};

// Re-export table types
pub use table::{Cell, DetailRow, DetailTable, TableOptions};
